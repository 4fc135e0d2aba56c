//! Legal move generation.
//!
//! A pure function of occupancy, tickets and round budget:
//!
//! 1. Every edge out of the mover's node whose destination holds no
//!    detective is a candidate. Mr X never blocks a destination.
//! 2. A candidate yields a ticket move for the mapped ticket if the mover
//!    holds one, and a `Secret` move if the mover holds a secret ticket.
//! 3. Mr X with a `Double` ticket and at least two rounds left may chain
//!    two candidates, provided he can pay for both legs (two of a kind if
//!    both legs use the same ticket).
//!
//! An empty result is reported as-is. Substituting a pass for a stuck
//! detective is the state machine's job.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Colour, Move, MoveSet, NodeId, Ticket, TicketLedger, TicketMove};
use crate::graph::TransportGraph;

/// Single-leg candidates from one node.
type Legs = SmallVec<[TicketMove; 16]>;

/// Computes legal moves against a fixed snapshot of the board.
pub struct MoveGenerator<'a, G: TransportGraph + ?Sized> {
    graph: &'a G,
    /// Nodes currently holding a detective.
    occupied: FxHashSet<NodeId>,
    /// Rounds left in the schedule from the current round.
    rounds_remaining: usize,
}

impl<'a, G: TransportGraph + ?Sized> MoveGenerator<'a, G> {
    /// Create a generator for the current board.
    pub fn new(
        graph: &'a G,
        detective_locations: impl IntoIterator<Item = NodeId>,
        rounds_remaining: usize,
    ) -> Self {
        Self {
            graph,
            occupied: detective_locations.into_iter().collect(),
            rounds_remaining,
        }
    }

    /// Check if a detective stands on `node`.
    #[must_use]
    pub fn is_occupied(&self, node: NodeId) -> bool {
        self.occupied.contains(&node)
    }

    /// All legal moves for a player standing at `location` with `tickets`.
    #[must_use]
    pub fn legal_moves(&self, colour: Colour, location: NodeId, tickets: &TicketLedger) -> MoveSet {
        let firsts = self.legs_from(colour, location, tickets);
        let mut moves: MoveSet = firsts.iter().copied().map(Move::Ticket).collect();

        if self.can_double(colour, tickets) {
            for first in &firsts {
                for second in self.legs_from(colour, first.destination, tickets) {
                    if can_pay_both(tickets, first.ticket, second.ticket) {
                        moves.insert(Move::double(colour, *first, second));
                    }
                }
            }
        }

        tracing::trace!(%colour, %location, count = moves.len(), "generated legal moves");
        moves
    }

    /// Check if the player has at least one legal move.
    #[must_use]
    pub fn has_moves(&self, colour: Colour, location: NodeId, tickets: &TicketLedger) -> bool {
        // Any double move starts with a legal single leg, so singles decide.
        !self.legs_from(colour, location, tickets).is_empty()
    }

    fn can_double(&self, colour: Colour, tickets: &TicketLedger) -> bool {
        colour.is_mr_x() && tickets.has(Ticket::Double, 1) && self.rounds_remaining >= 2
    }

    fn legs_from(&self, colour: Colour, location: NodeId, tickets: &TicketLedger) -> Legs {
        let mut legs = Legs::new();
        let has_secret = tickets.has(Ticket::Secret, 1);

        for edge in self.graph.edges_from(location) {
            if self.is_occupied(edge.destination) {
                continue;
            }

            let ticket = Ticket::from_transport(edge.transport);
            if tickets.has(ticket, 1) {
                legs.push(TicketMove::new(colour, ticket, edge.destination));
            }
            if has_secret && ticket != Ticket::Secret {
                legs.push(TicketMove::new(colour, Ticket::Secret, edge.destination));
            }
        }

        legs
    }
}

/// One ticket per leg: the same kind twice needs two of it.
fn can_pay_both(tickets: &TicketLedger, first: Ticket, second: Ticket) -> bool {
    if first == second {
        tickets.has(first, 2)
    } else {
        tickets.has(first, 1) && tickets.has(second, 1)
    }
}
