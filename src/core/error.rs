//! Error taxonomy.
//!
//! - `ConfigError`: construction-time validation failures. Fatal.
//! - `LedgerError`: a ticket ledger refused a mutation. Reaching this from
//!   the engine means the move generator produced a move the ledger cannot
//!   pay for.
//! - `StateError`: an operation arrived in a state that cannot accept it.
//! - `GameError`: everything the engine's mutating API can return.

use thiserror::Error;

use super::colour::Colour;
use super::moves::Move;
use super::node::NodeId;
use super::ticket::Ticket;

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round schedule is empty")]
    EmptyRounds,

    #[error("transport graph is empty")]
    EmptyGraph,

    #[error("Mr X must be {expected}, got {actual}", expected = Colour::MR_X)]
    MrXColour { actual: Colour },

    #[error("at least one detective is required")]
    NoDetectives,

    #[error("duplicate colour {0}")]
    DuplicateColour(Colour),

    #[error("duplicate start location {0}")]
    DuplicateLocation(NodeId),

    #[error("{colour} starts at {location}, which is not on the graph")]
    UnknownLocation { colour: Colour, location: NodeId },

    #[error("{colour} has no count for {ticket} tickets")]
    MissingTicket { colour: Colour, ticket: Ticket },

    #[error("detective {colour} holds {count} {ticket} tickets")]
    DetectiveTicket {
        colour: Colour,
        ticket: Ticket,
        count: u32,
    },

    #[error("{ticket} tickets in play exceed the ledger capacity")]
    TicketOverflow { ticket: Ticket },
}

/// A ledger mutation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no {0} tickets left to remove")]
    Underflow(Ticket),

    #[error("{0} tickets cannot be held by a detective")]
    Restricted(Ticket),

    #[error("{0} ticket count would overflow")]
    Overflow(Ticket),
}

/// An operation arrived in a state that cannot accept it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("the game is over")]
    GameOver,

    #[error("a rotation is already in progress")]
    RotationInProgress,

    #[error("no move is pending; start a rotation first")]
    NoPendingMove,

    #[error("spectator is already registered")]
    AlreadySpectating,

    #[error("spectator is not registered")]
    NotSpectating,
}

/// Errors returned by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("illegal move for {colour}: {attempted}")]
    IllegalMove { colour: Colour, attempted: Move },

    #[error("illegal state: {0}")]
    IllegalState(#[from] StateError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("no player with colour {0}")]
    UnknownPlayer(Colour),
}
