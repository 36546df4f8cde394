//! Closed key kind enumerations.
//!
//! A model's primary key is stored as one of three column types, and the
//! `_id` half of a polymorphic column pair as one of four. Both sets are
//! fixed, so every dispatch over them is a total `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IdError;

// =============================================================================
// Primary Keys
// =============================================================================

/// Storage type of a model's primary key.
///
/// Deserializes through [`FromStr`], so key maps accept the same names
/// (and aliases, in any case) as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PrimaryKeyKind {
    /// Database-assigned auto-incrementing big integer.
    AutoIncrement,
    /// 26-character ULID string.
    Ulid,
    /// 36-character UUID (v4) string.
    Uuid,
}

impl PrimaryKeyKind {
    /// All primary-key kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::AutoIncrement, Self::Ulid, Self::Uuid];

    /// Returns true if the database assigns the key.
    #[must_use]
    pub const fn is_incrementing(&self) -> bool {
        matches!(self, Self::AutoIncrement)
    }

    /// Returns true if a key value must be generated before insert.
    #[must_use]
    pub const fn requires_value(&self) -> bool {
        !self.is_incrementing()
    }

    /// Runtime type of key values of this kind.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        match self {
            Self::AutoIncrement => KeyType::Int,
            Self::Ulid | Self::Uuid => KeyType::String,
        }
    }

    /// Length of generated values, if any.
    #[must_use]
    pub const fn value_len(&self) -> Option<usize> {
        match self {
            Self::AutoIncrement => None,
            Self::Ulid => Some(crate::ULID_LEN),
            Self::Uuid => Some(crate::UUID_LEN),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AutoIncrement => "auto_increment",
            Self::Ulid => "ulid",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for PrimaryKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryKeyKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto_increment" | "autoincrement" | "increments" | "int" => Ok(Self::AutoIncrement),
            "ulid" => Ok(Self::Ulid),
            "uuid" => Ok(Self::Uuid),
            _ => Err(IdError::UnknownPrimaryKeyKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for PrimaryKeyKind {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// =============================================================================
// Morphs
// =============================================================================

/// Storage type of the `_id` column in a polymorphic column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum MorphKind {
    /// Generic morphs; the schema builder picks its default id type.
    String,
    /// Unsigned big integer id.
    Numeric,
    /// UUID string id.
    Uuid,
    /// ULID string id.
    Ulid,
}

impl MorphKind {
    /// All morph kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::String, Self::Numeric, Self::Uuid, Self::Ulid];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Uuid => "uuid",
            Self::Ulid => "ulid",
        }
    }
}

impl fmt::Display for MorphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MorphKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "numeric" => Ok(Self::Numeric),
            "uuid" => Ok(Self::Uuid),
            "ulid" => Ok(Self::Ulid),
            _ => Err(IdError::UnknownMorphKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for MorphKind {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// =============================================================================
// Key Type
// =============================================================================

/// Runtime type of a key value as reported to the entity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Int,
    String,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Int => write!(f, "int"),
            KeyType::String => write!(f, "string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_kind_parse() {
        assert_eq!("ulid".parse::<PrimaryKeyKind>().unwrap(), PrimaryKeyKind::Ulid);
        assert_eq!("UUID".parse::<PrimaryKeyKind>().unwrap(), PrimaryKeyKind::Uuid);
        assert_eq!(
            "increments".parse::<PrimaryKeyKind>().unwrap(),
            PrimaryKeyKind::AutoIncrement
        );
        assert!(matches!(
            "serial".parse::<PrimaryKeyKind>(),
            Err(IdError::UnknownPrimaryKeyKind(_))
        ));
    }

    #[test]
    fn test_primary_key_kind_display_parses_back() {
        for kind in PrimaryKeyKind::ALL {
            assert_eq!(kind.to_string().parse::<PrimaryKeyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_key_type_by_kind() {
        assert_eq!(PrimaryKeyKind::AutoIncrement.key_type(), KeyType::Int);
        assert_eq!(PrimaryKeyKind::Ulid.key_type(), KeyType::String);
        assert_eq!(PrimaryKeyKind::Uuid.key_type(), KeyType::String);
        assert!(PrimaryKeyKind::AutoIncrement.is_incrementing());
        assert!(!PrimaryKeyKind::Uuid.is_incrementing());
    }

    #[test]
    fn test_morph_kind_parse() {
        for kind in MorphKind::ALL {
            assert_eq!(kind.as_str().parse::<MorphKind>().unwrap(), kind);
        }
        let err = "varchar".parse::<MorphKind>().unwrap_err();
        assert_eq!(err.input(), "varchar");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PrimaryKeyKind::AutoIncrement).unwrap();
        assert_eq!(json, "\"auto_increment\"");
        let kind: PrimaryKeyKind = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(kind, PrimaryKeyKind::AutoIncrement);
        let morph: MorphKind = serde_json::from_str("\"numeric\"").unwrap();
        assert_eq!(morph, MorphKind::Numeric);
    }

    #[test]
    fn test_deserialize_matches_from_str() {
        for name in ["ULID", "Uuid", "AutoIncrement", "increments", " int "] {
            let parsed: PrimaryKeyKind = name.parse().unwrap();
            let json = serde_json::to_string(name).unwrap();
            assert_eq!(serde_json::from_str::<PrimaryKeyKind>(&json).unwrap(), parsed);
        }

        let morph: MorphKind = serde_json::from_str("\"NUMERIC\"").unwrap();
        assert_eq!(morph, MorphKind::Numeric);

        let err = serde_json::from_str::<PrimaryKeyKind>("\"serial\"").unwrap_err();
        assert!(err.to_string().contains("unknown primary key kind 'serial'"));
        assert!(serde_json::from_str::<MorphKind>("3").is_err());
    }
}
