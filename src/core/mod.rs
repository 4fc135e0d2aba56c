//! Core types: nodes, colours, tickets, ledgers, moves, configuration, errors.
//!
//! Everything here is plain data. The rules that act on it live in
//! `rules`, and the state machine that owns it lives in `engine`.

pub mod node;
pub mod colour;
pub mod ticket;
pub mod ledger;
pub mod moves;
pub mod config;
pub mod error;

pub use node::NodeId;
pub use colour::Colour;
pub use ticket::{Ticket, Transport};
pub use ledger::TicketLedger;
pub use moves::{DoubleMove, Move, MoveSet, PassMove, TicketMove};
pub use config::{GameConfig, PlayerConfig, RoundSchedule};
pub use error::{ConfigError, GameError, LedgerError, StateError};
