//! Registry and model hook errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The registry attribute a lookup asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    PrimaryKeyKind,
    MorphKind,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::PrimaryKeyKind => write!(f, "primary key kind"),
            Attribute::MorphKind => write!(f, "morph kind"),
        }
    }
}

/// Registry lookup errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The model has no entry, or its entry lacks the requested attribute.
    #[error("model '{model}' is not registered with a {attribute}")]
    NotRegistered { model: String, attribute: Attribute },
}

impl RegistryError {
    pub(crate) fn not_registered(model: &str, attribute: Attribute) -> Self {
        RegistryError::NotRegistered {
            model: model.to_string(),
            attribute,
        }
    }

    /// Returns true for [`RegistryError::NotRegistered`].
    pub fn is_not_registered(&self) -> bool {
        matches!(self, RegistryError::NotRegistered { .. })
    }

    /// The model the failed lookup was for.
    pub fn model(&self) -> &str {
        match self {
            RegistryError::NotRegistered { model, .. } => model,
        }
    }
}

/// Errors raised while preparing an entity for insert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The entity's model is not registered.
    #[error(transparent)]
    NotRegistered(#[from] RegistryError),

    /// A ULID-keyed entity was given a key that is not a string.
    #[error("model '{model}' uses ULID keys but its key is not a string (found {found})")]
    NonStringUlid { model: String, found: &'static str },

    /// A UUID-keyed entity was given a key that is not a string.
    #[error("model '{model}' uses UUID keys but its key is not a string (found {found})")]
    NonStringUuid { model: String, found: &'static str },
}

impl ModelError {
    /// Returns true if the key held a value of the wrong runtime type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            ModelError::NonStringUlid { .. } | ModelError::NonStringUuid { .. }
        )
    }
}

/// Errors loading a registry mapping file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The mapping file could not be read.
    #[error("failed to read key map {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mapping file is not valid TOML or has unknown kinds.
    #[error("failed to parse key map {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
