//! Read-only query surface.
//!
//! Players and spectators only ever see the game through this trait, so
//! nothing handed to a collaborator can mutate the engine or reveal Mr X's
//! true location.

use rustc_hash::FxHashSet;

use crate::core::{Colour, NodeId, RoundSchedule, Ticket};

/// What anyone at the table may ask about the game.
pub trait ScotlandYardView {
    /// Colours in turn order, Mr X first.
    fn players(&self) -> &[Colour];

    /// Whose turn it is. Between rotations this is Mr X.
    fn current_player(&self) -> Colour;

    /// Current round index, starting at 0. Advances once per Mr X leg.
    fn current_round(&self) -> usize;

    /// Is the current round a reveal round?
    fn is_reveal_round(&self) -> bool;

    /// The full reveal schedule.
    fn rounds(&self) -> &RoundSchedule;

    /// A player's location as the public knows it. For Mr X this is the
    /// disclosed location. `None` for colours not in the game.
    fn player_location(&self, colour: Colour) -> Option<NodeId>;

    /// A player's ticket count. `None` for colours not in the game.
    fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32>;

    /// Winning colours. Empty until the game is over.
    fn winning_players(&self) -> &FxHashSet<Colour>;

    fn is_game_over(&self) -> bool;
}
