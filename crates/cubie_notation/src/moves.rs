use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{Layer, ParseError};

/// How far a layer turns, relative to its own clockwise direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turns {
    /// Clockwise quarter turn (no suffix).
    #[default]
    Cw,
    /// Counterclockwise quarter turn (`'`).
    Ccw,
    /// Half turn (`2`). A half turn has no direction.
    Half,
}

impl Turns {
    /// Returns the signed number of quarter turns: `1`, `-1`, or `2`.
    pub fn amount(self) -> i32 {
        match self {
            Turns::Cw => 1,
            Turns::Ccw => -1,
            Turns::Half => 2,
        }
    }
    /// Returns the number of quarter turns, ignoring direction.
    pub fn quarter_turns(self) -> u32 {
        self.amount().unsigned_abs()
    }

    /// Returns the suffix used in notation.
    pub fn suffix(self) -> &'static str {
        match self {
            Turns::Cw => "",
            Turns::Ccw => "'",
            Turns::Half => "2",
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turns::Cw => Turns::Ccw,
            Turns::Ccw => Turns::Cw,
            Turns::Half => Turns::Half,
        }
    }
}

/// Single layer turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Layer to turn.
    pub layer: Layer,
    /// Amount to turn it.
    pub turns: Turns,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer, self.turns.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_move(s)
    }
}

impl Move {
    /// Constructs a move.
    pub fn new(layer: Layer, turns: Turns) -> Self {
        Self { layer, turns }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            layer: self.layer,
            turns: self.turns.inverse(),
        }
    }
}

/// Formats a sequence of moves as a space-separated string.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

/// Returns the sequence of moves that undoes `moves`.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}
