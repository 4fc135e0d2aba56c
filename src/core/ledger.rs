//! Per-player ticket counters.
//!
//! A ledger is either Mr X's (every kind allowed) or a detective's
//! (`Secret` and `Double` pinned to zero for its whole lifetime). The
//! restriction is part of the ledger itself so no caller can break it.

use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::ticket::Ticket;

/// Ticket counts for one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketLedger {
    counts: [u32; Ticket::COUNT],
    restricted: bool,
}

impl TicketLedger {
    /// Create an empty, unrestricted ledger (Mr X).
    #[must_use]
    pub fn mr_x() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
            restricted: false,
        }
    }

    /// Create an empty detective ledger.
    #[must_use]
    pub fn detective() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
            restricted: true,
        }
    }

    /// Set a starting count (builder pattern).
    ///
    /// Fails for a nonzero `Secret`/`Double` count on a detective ledger.
    pub fn with(mut self, ticket: Ticket, count: u32) -> Result<Self, LedgerError> {
        if self.restricted && ticket.is_mr_x_only() && count > 0 {
            return Err(LedgerError::Restricted(ticket));
        }
        self.counts[ticket.index()] = count;
        Ok(self)
    }

    /// Check if this is a detective ledger.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Number of tickets of a kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check for at least `n` tickets of a kind.
    #[must_use]
    pub fn has(&self, ticket: Ticket, n: u32) -> bool {
        self.count(ticket) >= n
    }

    /// Spend one ticket.
    pub fn remove(&mut self, ticket: Ticket) -> Result<(), LedgerError> {
        let slot = &mut self.counts[ticket.index()];
        if *slot == 0 {
            return Err(LedgerError::Underflow(ticket));
        }
        *slot -= 1;
        Ok(())
    }

    /// Receive one ticket.
    pub fn add(&mut self, ticket: Ticket) -> Result<(), LedgerError> {
        if self.restricted && ticket.is_mr_x_only() {
            return Err(LedgerError::Restricted(ticket));
        }
        let slot = &mut self.counts[ticket.index()];
        *slot = slot.checked_add(1).ok_or(LedgerError::Overflow(ticket))?;
        Ok(())
    }

    /// Iterate over (ticket, count) pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(move |&t| (t, self.count(t)))
    }
}
