//! Model to key kind registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use varkeys_id::{enrich_row, enrich_rows, KeyValue, MorphKind, PrimaryKeyKind, Row};

use crate::error::{Attribute, RegistryError};

/// The kinds configured for one model.
///
/// Either half may be missing; lookups of a missing half fail the same way
/// as lookups of an unknown model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Registration {
    /// Storage type of the model's primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKeyKind>,

    /// Storage type of morph columns pointing at the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph: Option<MorphKind>,
}

impl Registration {
    /// A registration with only a primary-key kind.
    #[must_use]
    pub const fn new(primary_key: PrimaryKeyKind) -> Self {
        Self {
            primary_key: Some(primary_key),
            morph: None,
        }
    }

    /// A registration with only a morph kind.
    #[must_use]
    pub const fn morph_only(morph: MorphKind) -> Self {
        Self {
            primary_key: None,
            morph: Some(morph),
        }
    }

    /// Adds a morph kind.
    #[must_use]
    pub const fn with_morph(mut self, morph: MorphKind) -> Self {
        self.morph = Some(morph);
        self
    }
}

/// Read access to registered key kinds.
///
/// Implemented by [`KeyRegistry`] and [`crate::SharedKeyRegistry`] so the
/// model hook works with either.
pub trait KeyLookup {
    /// The primary-key kind registered for `model`.
    fn primary_key_kind(&self, model: &str) -> Result<PrimaryKeyKind, RegistryError>;

    /// The morph kind registered for `model`.
    fn morph_kind(&self, model: &str) -> Result<MorphKind, RegistryError>;

    /// Whether `model` has any entry.
    fn is_registered(&self, model: &str) -> bool;
}

/// Registered key kinds, keyed by model identifier.
///
/// Built once at startup and handed to whatever needs it. Writes take
/// `&mut self`; wrap it in [`crate::SharedKeyRegistry`] to share it between
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRegistry {
    entries: BTreeMap<String, Registration>,
}

impl KeyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `mappings` into the registry.
    ///
    /// A model that is already registered has its entry replaced. Model
    /// identifiers are not checked.
    pub fn map<I, K>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (K, Registration)>,
        K: Into<String>,
    {
        let mut merged = 0usize;
        for (model, registration) in mappings {
            self.entries.insert(model.into(), registration);
            merged += 1;
        }

        debug!(merged, total = self.entries.len(), "Merged key registrations");
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        debug!(cleared, "Cleared key registry");
    }

    /// The primary-key kind registered for `model`.
    ///
    /// Fails with [`RegistryError::NotRegistered`] if the model is unknown or
    /// was registered without a primary-key kind.
    pub fn primary_key_kind(&self, model: &str) -> Result<PrimaryKeyKind, RegistryError> {
        self.entries
            .get(model)
            .and_then(|reg| reg.primary_key)
            .ok_or_else(|| RegistryError::not_registered(model, Attribute::PrimaryKeyKind))
    }

    /// The morph kind registered for `model`.
    ///
    /// Fails with [`RegistryError::NotRegistered`] if the model is unknown or
    /// was registered without a morph kind.
    pub fn morph_kind(&self, model: &str) -> Result<MorphKind, RegistryError> {
        self.entries
            .get(model)
            .and_then(|reg| reg.morph)
            .ok_or_else(|| RegistryError::not_registered(model, Attribute::MorphKind))
    }

    /// Whether `model` has an entry, partial or full.
    pub fn is_registered(&self, model: &str) -> bool {
        self.entries.contains_key(model)
    }

    /// The full entry for `model`, if any.
    pub fn get(&self, model: &str) -> Option<&Registration> {
        self.entries.get(model)
    }

    /// Registered models and their entries, sorted by model.
    pub fn models(&self) -> impl Iterator<Item = (&str, &Registration)> {
        self.entries.iter().map(|(model, reg)| (model.as_str(), reg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generates a key for a new row of `model`.
    pub fn key_value_for(&self, model: &str) -> Result<KeyValue, RegistryError> {
        Ok(KeyValue::generate(self.primary_key_kind(model)?))
    }

    /// Fills in `id` on a pivot row whose table is keyed like `model`.
    pub fn enrich_pivot_row(&self, model: &str, row: Row) -> Result<Row, RegistryError> {
        Ok(enrich_row(self.primary_key_kind(model)?, row))
    }

    /// [`KeyRegistry::enrich_pivot_row`] for every id of a bulk attach.
    pub fn enrich_pivot_rows<K, I>(
        &self,
        model: &str,
        ids: I,
        row: &Row,
    ) -> Result<BTreeMap<K, Row>, RegistryError>
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        Ok(enrich_rows(self.primary_key_kind(model)?, ids, row))
    }
}

impl KeyLookup for KeyRegistry {
    fn primary_key_kind(&self, model: &str) -> Result<PrimaryKeyKind, RegistryError> {
        KeyRegistry::primary_key_kind(self, model)
    }

    fn morph_kind(&self, model: &str) -> Result<MorphKind, RegistryError> {
        KeyRegistry::morph_kind(self, model)
    }

    fn is_registered(&self, model: &str) -> bool {
        KeyRegistry::is_registered(self, model)
    }
}

impl<K: Into<String>> FromIterator<(K, Registration)> for KeyRegistry {
    fn from_iter<I: IntoIterator<Item = (K, Registration)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.map(iter);
        registry
    }
}
