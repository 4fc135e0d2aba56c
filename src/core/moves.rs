//! Moves: a closed set of variants.
//!
//! - `TicketMove`: spend one ticket, travel one edge.
//! - `DoubleMove`: spend a `Double` ticket plus one ticket per leg. Mr X only.
//! - `PassMove`: a detective with nothing legal to do.
//!
//! Moves compare structurally, so the same move built twice is the same
//! member of a legal-move set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::node::NodeId;
use super::ticket::Ticket;

/// A set of legal moves.
pub type MoveSet = FxHashSet<Move>;

/// A single-edge move paid with one ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl TicketMove {
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: NodeId) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }
}

/// Two ticket moves taken in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    #[must_use]
    pub const fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }

    /// Where the second leg ends.
    #[must_use]
    pub const fn final_destination(&self) -> NodeId {
        self.second.destination
    }
}

/// No move at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassMove {
    pub colour: Colour,
}

/// Any move a player can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Ticket(TicketMove),
    Double(DoubleMove),
    Pass(PassMove),
}

impl Move {
    /// Shorthand for a ticket move.
    #[must_use]
    pub const fn ticket(colour: Colour, ticket: Ticket, destination: NodeId) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Shorthand for a double move.
    #[must_use]
    pub const fn double(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Move::Double(DoubleMove::new(colour, first, second))
    }

    /// Shorthand for a pass.
    #[must_use]
    pub const fn pass(colour: Colour) -> Self {
        Move::Pass(PassMove { colour })
    }

    /// The colour of the player making this move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
            Move::Pass(m) => m.colour,
        }
    }

    /// Where the mover ends up, if it moves at all.
    #[must_use]
    pub const fn destination(&self) -> Option<NodeId> {
        match self {
            Move::Ticket(m) => Some(m.destination),
            Move::Double(m) => Some(m.final_destination()),
            Move::Pass(_) => None,
        }
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for TicketMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} takes {} to {}", self.colour, self.ticket, self.destination)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Ticket(m) => write!(f, "{}", m),
            Move::Double(m) => write!(
                f,
                "{} doubles: {} to {}, then {} to {}",
                m.colour, m.first.ticket, m.first.destination, m.second.ticket, m.second.destination
            ),
            Move::Pass(m) => write!(f, "{} passes", m.colour),
        }
    }
}
