//! The turn/round state machine and its collaborators.
//!
//! - `ScotlandYard`: owns the game state, validates and applies moves
//! - `ScotlandYardView`: read-only queries handed to collaborators
//! - `Spectator`: notification hooks
//! - `Player`: per-seat move choice

pub mod view;
pub mod spectator;
pub mod player;
pub mod model;

pub use view::ScotlandYardView;
pub use spectator::{EventLog, Spectator, SpectatorEvent, Spectators};
pub use player::{Player, RandomPlayer};
pub use model::{Phase, ScotlandYard};
