use thiserror::Error;

/// Error produced when parsing a move or an algorithm.
///
/// Every variant carries the token that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Empty token
    #[error("empty move")]
    Empty,
    /// Token is longer than a layer symbol plus one suffix
    #[error("bad move {0:?}: too long")]
    TooLong(String),
    /// First character is not a layer symbol
    #[error("bad move {token:?}: unknown layer {layer:?}")]
    UnknownLayer {
        /// Offending token.
        token: String,
        /// Character that should have been a layer symbol.
        layer: char,
    },
    /// Second character is neither `'` nor `2`
    #[error("bad move {token:?}: unknown suffix {suffix:?}")]
    UnknownSuffix {
        /// Offending token.
        token: String,
        /// Character that should have been a suffix.
        suffix: char,
    },
}

impl ParseError {
    /// Returns the token that could not be parsed.
    pub fn token(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::TooLong(token)
            | ParseError::UnknownLayer { token, .. }
            | ParseError::UnknownSuffix { token, .. } => token,
        }
    }
}
