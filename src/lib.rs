//! # rust-pursuit
//!
//! Rules engine for an asymmetric hidden-movement pursuit game: one
//! concealed evader, Mr X, runs across a transport graph while several
//! detectives try to land on him before the round schedule runs out.
//!
//! ## Design Principles
//!
//! 1. **Single authority**: the engine alone decides which moves are legal,
//!    spends tickets, discloses Mr X and declares the winner.
//!
//! 2. **Closed move set**: `Move` is an enum; every effect is applied by an
//!    exhaustive `match`, so a new variant cannot be silently ignored.
//!
//! 3. **Notify after mutate**: spectators are told about a transition once
//!    it is complete, never in the middle of one.
//!
//! ## Modules
//!
//! - `core`: nodes, colours, tickets, ledgers, moves, configuration, errors
//! - `graph`: the transport graph contract and an adjacency-list graph
//! - `rules`: move generation, disclosure, win conditions
//! - `engine`: the turn/round state machine, spectators, players
//!
//! ## Example
//!
//! ```
//! use rust_pursuit::core::{Colour, GameConfig, Move, NodeId, PlayerConfig, Ticket, Transport};
//! use rust_pursuit::engine::{ScotlandYard, ScotlandYardView};
//! use rust_pursuit::graph::AdjacencyGraph;
//!
//! let graph = AdjacencyGraph::builder()
//!     .link(1, 2, Transport::Taxi)
//!     .link(2, 3, Transport::Taxi)
//!     .build();
//! let config = GameConfig::new(vec![true, true], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
//!     .with_detective(PlayerConfig::detective(Colour::Blue, 3, 2, 0, 0));
//!
//! let mut game = ScotlandYard::new(config, graph).unwrap();
//! game.start_rotation().unwrap();
//! game.accept(Move::ticket(Colour::Black, Ticket::Taxi, NodeId::new(2))).unwrap();
//! game.accept(Move::ticket(Colour::Blue, Ticket::Taxi, NodeId::new(2))).unwrap();
//!
//! assert!(game.is_game_over());
//! assert!(game.winning_players().contains(&Colour::Blue));
//! ```

pub mod core;
pub mod graph;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Colour, NodeId, Ticket, Transport, TicketLedger,
    Move, MoveSet, TicketMove, DoubleMove, PassMove,
    GameConfig, PlayerConfig, RoundSchedule,
    ConfigError, GameError, LedgerError, StateError,
};

pub use crate::graph::{AdjacencyGraph, Edge, TransportGraph};

pub use crate::rules::{DisclosureTracker, MoveGenerator, Verdict, WinEvaluator};

pub use crate::engine::{
    EventLog, Phase, Player, RandomPlayer, ScotlandYard, ScotlandYardView,
    Spectator, SpectatorEvent,
};
