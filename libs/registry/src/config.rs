//! Key map files.
//!
//! A key map declares the registrations for an application in TOML:
//!
//! ```toml
//! [models."app::models::Widget"]
//! primary_key = "ulid"
//! morph = "ulid"
//!
//! [models."app::models::User"]
//! primary_key = "auto_increment"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::registry::{KeyRegistry, Registration};

/// Environment variable holding the key map path.
pub const KEY_MAP_ENV: &str = "VARKEYS_MAP";

/// Parsed key map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Registrations keyed by model identifier.
    #[serde(default)]
    pub models: BTreeMap<String, Registration>,
}

impl RegistryConfig {
    /// Parses a key map from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, "<inline>")
    }

    /// Reads and parses a key map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), models = config.models.len(), "Loaded key map");
        Ok(config)
    }

    /// Loads the key map named by `VARKEYS_MAP`, if the variable is set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var_os(KEY_MAP_ENV) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)).map(Some),
            _ => Ok(None),
        }
    }

    /// Builds a registry holding every model in the map.
    pub fn into_registry(self) -> KeyRegistry {
        KeyRegistry::from_config(self)
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}

impl KeyRegistry {
    /// Builds a registry from a parsed key map.
    pub fn from_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new();
        registry.map(config.models);
        registry
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use varkeys_id::{MorphKind, PrimaryKeyKind};

    use super::*;

    const KEY_MAP: &str = r#"
[models."app::models::Widget"]
primary_key = "ulid"
morph = "ulid"

[models."app::models::User"]
primary_key = "auto_increment"

[models."app::models::Tag"]
morph = "numeric"
"#;

    #[test]
    fn test_parse_key_map() {
        let config = RegistryConfig::from_toml_str(KEY_MAP).unwrap();
        assert_eq!(config.models.len(), 3);
        assert_eq!(
            config.models["app::models::Widget"],
            Registration::new(PrimaryKeyKind::Ulid).with_morph(MorphKind::Ulid)
        );

        let registry = config.into_registry();
        assert_eq!(
            registry.primary_key_kind("app::models::User").unwrap(),
            PrimaryKeyKind::AutoIncrement
        );
        assert!(registry.is_registered("app::models::Tag"));
        assert!(registry.primary_key_kind("app::models::Tag").is_err());
    }

    #[test]
    fn test_empty_key_map() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert!(config.into_registry().is_empty());
    }

    #[test]
    fn test_kind_names_are_case_insensitive() {
        let config = RegistryConfig::from_toml_str(
            "[models.Widget]\nprimary_key = \"ULID\"\nmorph = \"Ulid\"\n",
        )
        .unwrap();
        assert_eq!(
            config.models["Widget"],
            Registration::new(PrimaryKeyKind::Ulid).with_morph(MorphKind::Ulid)
        );
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = RegistryConfig::from_toml_str(
            "[models.Widget]\nprimary_key = \"serial\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err =
            RegistryConfig::from_toml_str("[models.Widget]\nkey = \"ulid\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(KEY_MAP.as_bytes()).unwrap();

        let config = RegistryConfig::load(file.path()).unwrap();
        assert_eq!(config.models.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegistryConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
