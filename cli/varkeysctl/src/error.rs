//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use varkeys_id::PrimaryKeyKind;
use varkeys_registry::{ConfigError, RegistryError};

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No key map given. Pass --map or set VARKEYS_MAP.")]
    NoKeyMap,

    #[error("'{value}' is not a valid {kind} key")]
    InvalidKey { value: String, kind: PrimaryKeyKind },

    #[error("expected <name>=<model>, got '{0}'")]
    InvalidPair(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(RegistryError::NotRegistered { model, attribute }) =
        err.downcast_ref::<RegistryError>()
    {
        return Some(format!(
            "Hint: add a {attribute} for '{model}' under [models.\"{model}\"] in the key map."
        ));
    }

    let config_error = err.chain().find_map(|e| e.downcast_ref::<ConfigError>());
    if let Some(ConfigError::Parse { .. }) = config_error {
        return Some(
            "Hint: primary_key is auto_increment, ulid or uuid; morph is string, numeric, uuid or ulid."
                .to_string(),
        );
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::NoKeyMap) => Some("Hint: vk --map keys.toml <command>".to_string()),
        _ => None,
    }
}
