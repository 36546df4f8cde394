//! Thread-safe registry handle.

use std::sync::Arc;

use parking_lot::RwLock;

use varkeys_id::{MorphKind, PrimaryKeyKind};

use crate::error::RegistryError;
use crate::registry::{KeyLookup, KeyRegistry, Registration};

/// A [`KeyRegistry`] behind a read-write lock, cheap to clone.
///
/// Lookups take the read lock; `map` and `clear` take the write lock.
#[derive(Debug, Clone, Default)]
pub struct SharedKeyRegistry {
    inner: Arc<RwLock<KeyRegistry>>,
}

impl SharedKeyRegistry {
    /// Wraps an existing registry.
    pub fn new(registry: KeyRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn map<I, K>(&self, mappings: I)
    where
        I: IntoIterator<Item = (K, Registration)>,
        K: Into<String>,
    {
        self.inner.write().map(mappings);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn primary_key_kind(&self, model: &str) -> Result<PrimaryKeyKind, RegistryError> {
        self.inner.read().primary_key_kind(model)
    }

    pub fn morph_kind(&self, model: &str) -> Result<MorphKind, RegistryError> {
        self.inner.read().morph_kind(model)
    }

    pub fn is_registered(&self, model: &str) -> bool {
        self.inner.read().is_registered(model)
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> KeyRegistry {
        self.inner.read().clone()
    }
}

impl From<KeyRegistry> for SharedKeyRegistry {
    fn from(registry: KeyRegistry) -> Self {
        Self::new(registry)
    }
}

impl KeyLookup for SharedKeyRegistry {
    fn primary_key_kind(&self, model: &str) -> Result<PrimaryKeyKind, RegistryError> {
        SharedKeyRegistry::primary_key_kind(self, model)
    }

    fn morph_kind(&self, model: &str) -> Result<MorphKind, RegistryError> {
        SharedKeyRegistry::morph_kind(self, model)
    }

    fn is_registered(&self, model: &str) -> bool {
        SharedKeyRegistry::is_registered(self, model)
    }
}
