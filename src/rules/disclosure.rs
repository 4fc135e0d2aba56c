//! What the detectives know about Mr X's whereabouts.
//!
//! The disclosed location starts at Mr X's true start node and only moves
//! on reveal rounds. Every Mr X move is broadcast with its real ticket but
//! with the disclosed location in place of the real destination, so a
//! hidden move still shows how Mr X travelled.

use crate::core::{DoubleMove, NodeId, TicketMove};

/// Tracks Mr X's publicly known location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureTracker {
    disclosed: NodeId,
}

impl DisclosureTracker {
    #[must_use]
    pub fn new(start: NodeId) -> Self {
        Self { disclosed: start }
    }

    /// Mr X's last publicly known location.
    #[must_use]
    pub fn disclosed(&self) -> NodeId {
        self.disclosed
    }

    /// Record one leg played in a round with the given reveal flag, and
    /// return the leg as the public sees it.
    pub fn disclose(&mut self, leg: TicketMove, reveal: bool) -> TicketMove {
        if reveal {
            self.disclosed = leg.destination;
        }
        TicketMove::new(leg.colour, leg.ticket, self.disclosed)
    }

    /// Public form of a double move, each leg judged by its own round's
    /// flag. Does not record anything; the legs are recorded as they are
    /// applied.
    #[must_use]
    pub fn preview_double(&self, mv: &DoubleMove, first_reveal: bool, second_reveal: bool) -> DoubleMove {
        let mut scratch = *self;
        let first = scratch.disclose(mv.first, first_reveal);
        let second = scratch.disclose(mv.second, second_reveal);
        DoubleMove::new(mv.colour, first, second)
    }
}
