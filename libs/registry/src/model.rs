//! Pre-persist key handling for entities.
//!
//! An entity implements [`HasVariableKey`] and calls
//! [`HasVariableKey::before_create`] right before its first insert. The hook
//! looks up the model's primary-key kind and then:
//!
//! - auto-increment: leaves the key alone
//! - ULID/UUID, no key yet: generates one and stores it
//! - ULID/UUID, string key: keeps it
//! - ULID/UUID, any other key: fails with a type mismatch

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use varkeys_id::{KeyType, KeyValue, PrimaryKeyKind, KEY_COLUMN};

use crate::error::{ModelError, RegistryError};
use crate::registry::KeyLookup;

/// Key facts for a model, as an ORM layer asks for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetadata {
    pub model: String,
    pub kind: PrimaryKeyKind,
    pub incrementing: bool,
    pub key_type: KeyType,
    pub unique_ids: Vec<String>,
}

/// An entity whose primary key kind comes from a [`KeyLookup`].
///
/// Every provided method fails with [`RegistryError::NotRegistered`] when the
/// entity's model has no primary-key kind.
pub trait HasVariableKey {
    /// Identifier the model is registered under.
    fn model_id(&self) -> &str;

    /// Current key value, if any.
    fn key(&self) -> Option<&Value>;

    /// Stores a generated key.
    fn set_key(&mut self, value: String);

    /// Name of the key column.
    fn key_name(&self) -> &str {
        KEY_COLUMN
    }

    /// The registered primary-key kind of this model.
    fn primary_key_kind<R>(&self, registry: &R) -> Result<PrimaryKeyKind, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        registry.primary_key_kind(self.model_id())
    }

    /// Whether the database assigns the key.
    fn incrementing<R>(&self, registry: &R) -> Result<bool, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        Ok(self.primary_key_kind(registry)?.is_incrementing())
    }

    /// Runtime type of this model's keys.
    fn key_type<R>(&self, registry: &R) -> Result<KeyType, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        Ok(self.primary_key_kind(registry)?.key_type())
    }

    /// Columns that receive generated values on create.
    fn unique_ids<R>(&self, registry: &R) -> Result<Vec<String>, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        let kind = self.primary_key_kind(registry)?;
        if kind.requires_value() {
            Ok(vec![self.key_name().to_string()])
        } else {
            Ok(Vec::new())
        }
    }

    /// A fresh key for this model, `None` for auto-increment.
    fn new_unique_id<R>(&self, registry: &R) -> Result<Option<String>, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        Ok(KeyValue::generate(self.primary_key_kind(registry)?).into_value())
    }

    /// Everything the persistence layer needs to know about the key.
    fn key_metadata<R>(&self, registry: &R) -> Result<KeyMetadata, RegistryError>
    where
        R: KeyLookup + ?Sized,
    {
        let kind = self.primary_key_kind(registry)?;
        Ok(KeyMetadata {
            model: self.model_id().to_string(),
            kind,
            incrementing: kind.is_incrementing(),
            key_type: kind.key_type(),
            unique_ids: self.unique_ids(registry)?,
        })
    }

    /// Validates or assigns the key before the first insert.
    fn before_create<R>(&mut self, registry: &R) -> Result<(), ModelError>
    where
        R: KeyLookup + ?Sized,
    {
        let kind = self.primary_key_kind(registry)?;
        if kind.is_incrementing() {
            return Ok(());
        }

        match self.key() {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(Value::String(_)) => return Ok(()),
            Some(other) => {
                return Err(type_mismatch(kind, self.model_id(), other));
            }
        }

        if let Some(value) = KeyValue::generate(kind).into_value() {
            debug!(model = %self.model_id(), %kind, key = %value, "Generated key");
            self.set_key(value);
        }

        Ok(())
    }
}

fn type_mismatch(kind: PrimaryKeyKind, model: &str, value: &Value) -> ModelError {
    let model = model.to_string();
    let found = json_type(value);
    match kind {
        PrimaryKeyKind::Uuid => ModelError::NonStringUuid { model, found },
        _ => ModelError::NonStringUlid { model, found },
    }
}

/// Runtime type name of a JSON value.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
