//! # varkeys-registry
//!
//! Which key kinds each model uses, and the hook that applies them.
//!
//! A [`KeyRegistry`] maps model identifiers to a [`Registration`] (a
//! primary-key kind and an optional morph kind). It is an ordinary value:
//! build it at startup, from code or from a TOML key map
//! ([`RegistryConfig`]), and pass it to whatever needs it. Share it across
//! threads with [`SharedKeyRegistry`].
//!
//! Lookups for a model that is not registered, or that was registered
//! without the requested kind, fail with [`RegistryError::NotRegistered`].
//! There is no default kind.
//!
//! Entities implement [`HasVariableKey`] and call
//! [`HasVariableKey::before_create`] before their first insert.

mod config;
mod error;
mod model;
mod registry;
mod shared;

pub use config::{RegistryConfig, KEY_MAP_ENV};
pub use error::{Attribute, ConfigError, ModelError, RegistryError};
pub use model::{json_type, HasVariableKey, KeyMetadata};
pub use registry::{KeyLookup, KeyRegistry, Registration};
pub use shared::SharedKeyRegistry;
