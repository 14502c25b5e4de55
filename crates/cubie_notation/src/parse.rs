//! Functions for parsing algorithm notation.

use crate::{Layer, Move, ParseError, Turns};

/// Parses a sequence of whitespace-separated moves.
///
/// Repeated whitespace is ignored, so an empty or blank string produces no
/// moves. If any token is malformed, no moves are returned.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseError> {
    s.split_whitespace().map(parse_move).collect()
}

/// Parses a single move such as `R`, `u'`, or `M2`.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    let mut chars = token.chars();

    let layer_char = chars.next().ok_or(ParseError::Empty)?;
    let suffix_char = chars.next();
    if chars.next().is_some() {
        return Err(ParseError::TooLong(token.to_owned()));
    }

    let layer = Layer::from_symbol(layer_char).ok_or_else(|| ParseError::UnknownLayer {
        token: token.to_owned(),
        layer: layer_char,
    })?;
    let turns = match suffix_char {
        None => Turns::Cw,
        Some('\'') => Turns::Ccw,
        Some('2') => Turns::Half,
        Some(suffix) => {
            return Err(ParseError::UnknownSuffix {
                token: token.to_owned(),
                suffix,
            });
        }
    };

    Ok(Move { layer, turns })
}
