//! Error types for key kind parsing.

use thiserror::Error;

/// Errors that can occur when parsing key kinds from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The string does not name a primary-key kind.
    #[error("unknown primary key kind '{0}': expected auto_increment, ulid or uuid")]
    UnknownPrimaryKeyKind(String),

    /// The string does not name a morph kind.
    #[error("unknown morph kind '{0}': expected string, numeric, uuid or ulid")]
    UnknownMorphKind(String),
}

impl IdError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            IdError::UnknownPrimaryKeyKind(s) | IdError::UnknownMorphKind(s) => s,
        }
    }
}
