//! Spectators: observers notified after each state transition.
//!
//! Notifications happen after the engine has finished mutating, so a
//! spectator always sees a consistent view. Spectators receive Mr X's moves
//! in disclosed form only.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::view::ScotlandYardView;
use crate::core::{Colour, Move, StateError};

/// Observer of a running game. Every hook defaults to doing nothing.
pub trait Spectator {
    /// A rotation begins at `round`.
    ///
    /// Fires once per rotation, never per Mr X leg: a double move spends
    /// rounds `round` and `round + 1` without a second announcement. Read
    /// `current_round` from the view to follow the index mid-rotation.
    fn on_round_started(&self, _view: &dyn ScotlandYardView, _round: usize) {}

    /// A move was made. Mr X's moves arrive in disclosed form.
    fn on_move_made(&self, _view: &dyn ScotlandYardView, _mv: &Move) {}

    /// Every player moved and the game goes on.
    fn on_rotation_complete(&self, _view: &dyn ScotlandYardView) {}

    /// The game ended. Fires at most once per game.
    fn on_game_over(&self, _view: &dyn ScotlandYardView, _winners: &FxHashSet<Colour>) {}
}

/// Registered spectators, in registration order. Identity is by allocation.
#[derive(Default)]
pub struct Spectators {
    list: Vec<Rc<dyn Spectator>>,
}

impl Spectators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spectator. Registering the same one twice is an error.
    pub fn register(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), StateError> {
        if self.contains(&spectator) {
            return Err(StateError::AlreadySpectating);
        }
        self.list.push(spectator);
        Ok(())
    }

    /// Remove a spectator. Removing one that is not registered is an error.
    pub fn unregister(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), StateError> {
        let pos = self
            .list
            .iter()
            .position(|s| Rc::ptr_eq(s, spectator))
            .ok_or(StateError::NotSpectating)?;
        self.list.remove(pos);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, spectator: &Rc<dyn Spectator>) -> bool {
        self.list.iter().any(|s| Rc::ptr_eq(s, spectator))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Spectator>> {
        self.list.iter()
    }
}

/// One notification, as recorded by `EventLog`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectatorEvent {
    RoundStarted(usize),
    MoveMade(Move),
    RotationComplete,
    /// Winners sorted by colour.
    GameOver(Vec<Colour>),
}

/// A spectator that records every notification it receives.
///
/// ## Example
///
/// ```
/// use std::rc::Rc;
/// use rust_pursuit::engine::{EventLog, Spectator};
///
/// let log = Rc::new(EventLog::new());
/// let as_spectator: Rc<dyn Spectator> = log.clone();
/// assert!(log.events().is_empty());
/// # drop(as_spectator);
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<SpectatorEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<SpectatorEvent> {
        self.events.borrow().clone()
    }

    /// Moves recorded so far, oldest first.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SpectatorEvent::MoveMade(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: SpectatorEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Spectator for EventLog {
    fn on_round_started(&self, _view: &dyn ScotlandYardView, round: usize) {
        self.push(SpectatorEvent::RoundStarted(round));
    }

    fn on_move_made(&self, _view: &dyn ScotlandYardView, mv: &Move) {
        self.push(SpectatorEvent::MoveMade(*mv));
    }

    fn on_rotation_complete(&self, _view: &dyn ScotlandYardView) {
        self.push(SpectatorEvent::RotationComplete);
    }

    fn on_game_over(&self, _view: &dyn ScotlandYardView, winners: &FxHashSet<Colour>) {
        let mut sorted: Vec<_> = winners.iter().copied().collect();
        sorted.sort();
        self.push(SpectatorEvent::GameOver(sorted));
    }
}
