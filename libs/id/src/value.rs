//! Key value generation.

use serde::Serialize;
use ulid::Ulid;
use uuid::Uuid;

use crate::PrimaryKeyKind;

/// Length of a ULID in its canonical text form.
pub const ULID_LEN: usize = 26;

/// Length of a hyphenated UUID.
pub const UUID_LEN: usize = 36;

/// A freshly generated key for one insert.
///
/// The value is present iff the kind is not [`PrimaryKeyKind::AutoIncrement`];
/// fields are private so the pair can only come from [`KeyValue::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    kind: PrimaryKeyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl KeyValue {
    /// Generates a key of the given kind.
    ///
    /// ULIDs and UUIDs come back lowercase. Auto-increment keys carry no
    /// value because the database assigns them.
    #[must_use]
    pub fn generate(kind: PrimaryKeyKind) -> Self {
        let value = match kind {
            PrimaryKeyKind::AutoIncrement => None,
            PrimaryKeyKind::Ulid => Some(new_ulid()),
            PrimaryKeyKind::Uuid => Some(new_uuid()),
        };

        Self { kind, value }
    }

    /// The kind this value was generated for.
    #[must_use]
    pub const fn kind(&self) -> PrimaryKeyKind {
        self.kind
    }

    /// The generated value, if the kind has one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Consumes the key and returns the generated value.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        self.value
    }
}

/// Shorthand for [`KeyValue::generate`].
#[must_use]
pub fn generate(kind: PrimaryKeyKind) -> KeyValue {
    KeyValue::generate(kind)
}

fn new_ulid() -> String {
    Ulid::new().to_string().to_ascii_lowercase()
}

fn new_uuid() -> String {
    // Hyphenated formatting is already lowercase.
    Uuid::new_v4().hyphenated().to_string()
}

/// Returns true if `s` is a lowercase canonical ULID.
#[must_use]
pub fn is_ulid(s: &str) -> bool {
    s.len() == ULID_LEN
        && s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        && Ulid::from_string(s).is_ok()
}

/// Returns true if `s` is a lowercase hyphenated UUID.
#[must_use]
pub fn is_uuid(s: &str) -> bool {
    s.len() == UUID_LEN
        && !s.bytes().any(|b| b.is_ascii_uppercase())
        && Uuid::try_parse(s).is_ok()
}
