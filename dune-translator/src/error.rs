//! Error types for building the translator's static data
//!
//! Translation itself is total over its input, so the only failures are
//! configuration failures raised while the lexicon or phrase bank is built.

use crate::lexicon::Direction;
use thiserror::Error;

/// Invalid static data detected at start-up
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The same source key maps to two different targets in one direction
    #[error("duplicate {direction} key '{key}' maps to both '{existing}' and '{conflicting}'")]
    DuplicateKey {
        /// Direction in which the conflict was found
        direction: Direction,
        /// Normalized source key
        key: String,
        /// Target already stored for the key
        existing: String,
        /// Target of the rejected entry
        conflicting: String,
    },

    /// A lexicon entry side does not tokenize to exactly one word
    #[error("lexicon entry '{0}' is not a single word")]
    NotAWord(String),

    /// The phrase bank has no phrases to suggest
    #[error("phrase bank is empty")]
    EmptyPhraseBank,

    /// An external data file could not be read or parsed
    #[error("failed to load '{path}': {reason}")]
    Load {
        /// Path of the file (or `<string>` for in-memory input)
        path: String,
        /// Underlying failure
        reason: String,
    },
}

/// Result type for data construction
pub type ConfigResult<T> = Result<T, ConfigError>;
