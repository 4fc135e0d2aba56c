//! Game configuration.
//!
//! Hosts describe a game with:
//! - `RoundSchedule`: one reveal flag per round
//! - `PlayerConfig`: colour, start location and starting tickets per player
//! - `GameConfig`: the schedule plus Mr X and the detectives
//!
//! `GameConfig::validate` is the only gate into the engine; a config that
//! passes it produces a game whose invariants hold from round 0.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::error::ConfigError;
use super::ledger::TicketLedger;
use super::node::NodeId;
use super::ticket::Ticket;
use crate::graph::TransportGraph;

/// Reveal flags, one per round. `true` means Mr X surfaces that round.
///
/// The length bounds how long the game can run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSchedule(Vec<bool>);

impl RoundSchedule {
    /// Create a schedule from reveal flags.
    #[must_use]
    pub fn new(rounds: Vec<bool>) -> Self {
        Self(rounds)
    }

    /// The classic 24-round schedule, surfacing on rounds 3, 8, 13, 18 and 24.
    #[must_use]
    pub fn standard() -> Self {
        Self((1..=24).map(|r| matches!(r, 3 | 8 | 13 | 18 | 24)).collect())
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no rounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Is `round` (0-based) a reveal round? Rounds past the end never reveal.
    #[must_use]
    pub fn is_reveal(&self, round: usize) -> bool {
        self.0.get(round).copied().unwrap_or(false)
    }

    /// Rounds left to play starting at `round`.
    #[must_use]
    pub fn remaining(&self, round: usize) -> usize {
        self.0.len().saturating_sub(round)
    }

    /// Reveal flags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for RoundSchedule {
    fn from(rounds: Vec<bool>) -> Self {
        Self(rounds)
    }
}

/// Starting setup for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub colour: Colour,
    pub location: NodeId,
    /// Starting counts. Must name all five ticket kinds.
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a player with no tickets listed yet.
    pub fn new(colour: Colour, location: impl Into<NodeId>) -> Self {
        Self {
            colour,
            location: location.into(),
            tickets: FxHashMap::default(),
        }
    }

    /// Mr X with every ticket kind listed.
    pub fn mr_x(
        location: impl Into<NodeId>,
        taxi: u32,
        bus: u32,
        underground: u32,
        secret: u32,
        double: u32,
    ) -> Self {
        Self::new(Colour::MR_X, location)
            .with_tickets(Ticket::Taxi, taxi)
            .with_tickets(Ticket::Bus, bus)
            .with_tickets(Ticket::Underground, underground)
            .with_tickets(Ticket::Secret, secret)
            .with_tickets(Ticket::Double, double)
    }

    /// A detective with zero `Secret` and `Double` tickets listed.
    pub fn detective(
        colour: Colour,
        location: impl Into<NodeId>,
        taxi: u32,
        bus: u32,
        underground: u32,
    ) -> Self {
        Self::new(colour, location)
            .with_tickets(Ticket::Taxi, taxi)
            .with_tickets(Ticket::Bus, bus)
            .with_tickets(Ticket::Underground, underground)
            .with_tickets(Ticket::Secret, 0)
            .with_tickets(Ticket::Double, 0)
    }

    /// Set a ticket count (builder pattern).
    #[must_use]
    pub fn with_tickets(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Build this player's ledger, checking the ticket map.
    pub fn ledger(&self) -> Result<TicketLedger, ConfigError> {
        let mut ledger = if self.colour.is_mr_x() {
            TicketLedger::mr_x()
        } else {
            TicketLedger::detective()
        };

        for ticket in Ticket::ALL {
            let count = *self.tickets.get(&ticket).ok_or(ConfigError::MissingTicket {
                colour: self.colour,
                ticket,
            })?;
            ledger = ledger.with(ticket, count).map_err(|_| ConfigError::DetectiveTicket {
                colour: self.colour,
                ticket,
                count,
            })?;
        }

        Ok(ledger)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rounds: RoundSchedule,
    pub mr_x: PlayerConfig,
    /// Detectives, in turn order.
    pub detectives: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create a configuration with no detectives yet.
    pub fn new(rounds: impl Into<RoundSchedule>, mr_x: PlayerConfig) -> Self {
        Self {
            rounds: rounds.into(),
            mr_x,
            detectives: Vec::new(),
        }
    }

    /// Add a detective (builder pattern).
    #[must_use]
    pub fn with_detective(mut self, detective: PlayerConfig) -> Self {
        self.detectives.push(detective);
        self
    }

    /// All players in turn order: Mr X, then detectives.
    pub fn players(&self) -> impl Iterator<Item = &PlayerConfig> {
        std::iter::once(&self.mr_x).chain(self.detectives.iter())
    }

    /// Check every construction invariant against the graph.
    pub fn validate<G: TransportGraph + ?Sized>(&self, graph: &G) -> Result<(), ConfigError> {
        if self.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        if !self.mr_x.colour.is_mr_x() {
            return Err(ConfigError::MrXColour {
                actual: self.mr_x.colour,
            });
        }
        if self.detectives.is_empty() {
            return Err(ConfigError::NoDetectives);
        }

        let mut locations = FxHashSet::default();
        for player in self.players() {
            if !locations.insert(player.location) {
                return Err(ConfigError::DuplicateLocation(player.location));
            }
        }

        let mut colours = FxHashSet::default();
        for player in self.players() {
            if !colours.insert(player.colour) {
                return Err(ConfigError::DuplicateColour(player.colour));
            }
        }

        for player in self.players() {
            if !graph.contains(player.location) {
                return Err(ConfigError::UnknownLocation {
                    colour: player.colour,
                    location: player.location,
                });
            }
            player.ledger()?;
        }

        // Spent detective tickets pile up on Mr X, so his count can reach
        // the sum of every starting count of that kind.
        for ticket in Ticket::ALL {
            let total: u64 = self
                .players()
                .map(|p| u64::from(p.tickets.get(&ticket).copied().unwrap_or(0)))
                .sum();
            if total > u64::from(u32::MAX) {
                return Err(ConfigError::TicketOverflow { ticket });
            }
        }

        Ok(())
    }
}
