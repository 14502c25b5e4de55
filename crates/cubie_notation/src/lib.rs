//! Cube algorithm notation parser and formatter.
//!
//! An algorithm is a whitespace-separated list of moves such as
//! `R U R' U' r2 M`. Each move names a [`Layer`] and optionally carries a
//! suffix: `'` for a counterclockwise quarter turn or `2` for a half turn.

mod errors;
mod face;
mod layer;
mod moves;
mod parse;

pub use errors::ParseError;
pub use face::Face;
pub use layer::{Layer, Slice};
pub use moves::{Move, Turns, format_moves, invert_moves};
pub use parse::{parse_move, parse_moves};

#[cfg(test)]
mod tests;
