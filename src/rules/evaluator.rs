//! Win conditions.
//!
//! The state machine asks at four points, and the first verdict sticks:
//!
//! | When                   | Condition                             | Winner     |
//! |------------------------|---------------------------------------|------------|
//! | construction           | Mr X has no legal move                | detectives |
//! | construction           | every detective has no legal move     | Mr X       |
//! | after a detective move | detective on Mr X, round > 0          | detectives |
//! | end of rotation        | schedule exhausted                    | Mr X       |
//! | end of rotation        | Mr X has no legal move                | detectives |
//! | end of rotation        | every detective has no legal move     | Mr X       |
//!
//! Stuck checks are passed as closures so they only run when the earlier
//! conditions did not already decide the game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Colour, NodeId};

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    MrXWins,
    DetectivesWin,
}

impl Verdict {
    /// The winning colours out of the players in the game.
    #[must_use]
    pub fn winners(self, players: &[Colour]) -> FxHashSet<Colour> {
        players
            .iter()
            .copied()
            .filter(|c| match self {
                Verdict::MrXWins => c.is_mr_x(),
                Verdict::DetectivesWin => c.is_detective(),
            })
            .collect()
    }
}

/// Decides when the game is over. Inert once a verdict is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinEvaluator {
    verdict: Option<Verdict>,
}

impl WinEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded verdict, if the game is over.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.verdict.is_some()
    }

    /// Record a verdict. Returns false (and changes nothing) if one was
    /// already recorded.
    pub fn settle(&mut self, verdict: Verdict) -> bool {
        if self.verdict.is_some() {
            return false;
        }
        self.verdict = Some(verdict);
        true
    }

    /// Check the starting position.
    pub fn at_start(
        &self,
        mr_x_stuck: impl FnOnce() -> bool,
        detectives_stuck: impl FnOnce() -> bool,
    ) -> Option<Verdict> {
        if self.is_settled() {
            None
        } else if mr_x_stuck() {
            Some(Verdict::DetectivesWin)
        } else if detectives_stuck() {
            Some(Verdict::MrXWins)
        } else {
            None
        }
    }

    /// Check for a capture after a detective moves. Sharing Mr X's node in
    /// round 0 is not a capture.
    #[must_use]
    pub fn after_detective_move(&self, detective: NodeId, mr_x: NodeId, round: usize) -> Option<Verdict> {
        if !self.is_settled() && round > 0 && detective == mr_x {
            Some(Verdict::DetectivesWin)
        } else {
            None
        }
    }

    /// Check once every player has moved this rotation.
    pub fn after_rotation(
        &self,
        round: usize,
        total_rounds: usize,
        mr_x_stuck: impl FnOnce() -> bool,
        detectives_stuck: impl FnOnce() -> bool,
    ) -> Option<Verdict> {
        if self.is_settled() {
            None
        } else if round >= total_rounds {
            Some(Verdict::MrXWins)
        } else if mr_x_stuck() {
            Some(Verdict::DetectivesWin)
        } else if detectives_stuck() {
            Some(Verdict::MrXWins)
        } else {
            None
        }
    }
}
