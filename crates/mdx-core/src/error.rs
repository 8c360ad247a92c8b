//! # Error Types — Vocabulary Parse Failures
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Parse failures carry both the vocabulary kind and the
//! offending symbol so a rejected feed entry can be traced to its source.

use thiserror::Error;

/// Error raised when a string does not belong to a closed vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The symbol is not a member of the named vocabulary.
    #[error("unknown {kind} symbol: {value:?}")]
    UnknownSymbol {
        /// Which vocabulary was being parsed (e.g. "event type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl VocabularyError {
    /// Convenience constructor used by the `FromStr` implementations.
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownSymbol {
            kind,
            value: value.to_owned(),
        }
    }
}
