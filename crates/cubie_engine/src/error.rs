use cubie_notation::{Move, ParseError};
use cubie_prefs::PrefsError;
use thiserror::Error;

/// Error returned by the move engine.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("bad algorithm: {0}")]
    Parse(#[from] ParseError),
    #[error("bad preferences: {0}")]
    Prefs(#[from] PrefsError),
    #[error("cannot {action} while {mv} is in progress")]
    InvalidState { action: &'static str, mv: Move },
}
