//! Error type for the word finder
//!
//! Every failure the library can report. "No matches" is never an error:
//! an empty [`Matches`](crate::finder::Matches) is a successful answer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by pattern compilation and dictionary loading
#[derive(Debug, Error)]
pub enum FinderError {
    /// The positional specification has zero slots
    #[error("pattern must contain at least one slot")]
    EmptyPattern,

    /// A slot is neither a single character nor empty
    #[error("slot {position} must be a single character or empty, got {slot:?}")]
    InvalidPattern { position: usize, slot: String },

    /// The word list could not be loaded at startup
    #[error("word list {} is unavailable: {reason}", .path.display())]
    DictionaryUnavailable { path: PathBuf, reason: String },
}

impl FinderError {
    pub(crate) fn invalid_slot(position: usize, slot: impl Into<String>) -> Self {
        Self::InvalidPattern {
            position,
            slot: slot.into(),
        }
    }
}
