//! Seat controllers: whoever picks a move for a colour.
//!
//! A `Player` is asked once per turn with the legal-move set and answers
//! with one member of it. The engine validates the answer like any other
//! submission, so a misbehaving player cannot break the game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::view::ScotlandYardView;
use crate::core::{Move, MoveSet, NodeId};

/// Chooses moves for one seat.
pub trait Player {
    /// Pick one of `moves`. `location` is the seat's true location.
    ///
    /// `moves` is never empty: stuck detectives are offered a pass, and a
    /// stuck Mr X ends the game before he is asked.
    fn make_move(&mut self, view: &dyn ScotlandYardView, location: NodeId, moves: &MoveSet) -> Move;
}

/// Picks uniformly among legal moves with a seeded RNG.
///
/// Same seed and same game gives the same choices: moves are sorted before
/// sampling so set iteration order does not matter.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, _view: &dyn ScotlandYardView, _location: NodeId, moves: &MoveSet) -> Move {
        let mut sorted: Vec<Move> = moves.iter().copied().collect();
        sorted.sort_unstable();
        assert!(!sorted.is_empty(), "asked to move with no legal moves");
        sorted[self.rng.gen_range(0..sorted.len())]
    }
}
