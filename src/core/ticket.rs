//! Ticket kinds and transport kinds.
//!
//! Every edge of the transport graph carries a `Transport`. Moving along an
//! edge costs the ticket returned by `Ticket::from_transport`, or a `Secret`
//! ticket, which stands in for any transport.

use serde::{Deserialize, Serialize};

/// Kind of transport on a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// Ferry routes. Only a `Secret` ticket pays for these.
    Boat,
}

/// Kind of ticket held in a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// Number of ticket kinds.
    pub const COUNT: usize = 5;

    /// All ticket kinds, in ledger order.
    pub const ALL: [Ticket; Ticket::COUNT] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The ticket that pays for a given transport. Total: every transport
    /// maps to exactly one ticket.
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Boat => Ticket::Secret,
        }
    }

    /// Tickets only Mr X may ever hold.
    #[must_use]
    pub const fn is_mr_x_only(self) -> bool {
        matches!(self, Ticket::Secret | Ticket::Double)
    }

    /// Slot of this kind in a ledger's count array.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Secret => "Secret",
            Ticket::Double => "Double",
        };
        f.write_str(name)
    }
}
