//! Game rules: legal moves, fog of war, and win conditions.
//!
//! These are pure components. The `engine` owns the state and calls into
//! them; none of them mutate anything but themselves.

pub mod generator;
pub mod disclosure;
pub mod evaluator;

pub use generator::MoveGenerator;
pub use disclosure::DisclosureTracker;
pub use evaluator::{Verdict, WinEvaluator};
