//! Player colours.
//!
//! Exactly one colour is distinguished: `Black` always belongs to Mr X.
//! Every other colour is a detective colour.

use serde::{Deserialize, Serialize};

/// A player colour. Colours double as player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// The colour reserved for Mr X.
    pub const MR_X: Colour = Colour::Black;

    /// All colours, Mr X first.
    pub const ALL: [Colour; 6] = [
        Colour::Black,
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Check if this is Mr X's colour.
    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Check if this is a detective colour.
    #[must_use]
    pub const fn is_detective(self) -> bool {
        !self.is_mr_x()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}
