//! Check command - validate a key string.

use anyhow::Result;
use clap::Args;
use varkeys_id::{is_ulid, is_uuid, PrimaryKeyKind};

use crate::error::CliError;
use crate::output::print_success;

use super::CommandContext;

/// Check that a key string matches a kind.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Key to check.
    value: String,

    /// Expected kind (auto_increment, ulid, uuid).
    kind: PrimaryKeyKind,
}

impl CheckCommand {
    pub fn run(self, _ctx: CommandContext) -> Result<()> {
        if !key_matches(&self.value, self.kind) {
            return Err(CliError::InvalidKey {
                value: self.value,
                kind: self.kind,
            }
            .into());
        }

        print_success(&format!("'{}' is a valid {} key", self.value, self.kind));
        Ok(())
    }
}

fn key_matches(value: &str, kind: PrimaryKeyKind) -> bool {
    match kind {
        PrimaryKeyKind::AutoIncrement => value.parse::<u64>().is_ok_and(|n| n > 0),
        PrimaryKeyKind::Ulid => is_ulid(value),
        PrimaryKeyKind::Uuid => is_uuid(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches() {
        assert!(key_matches("42", PrimaryKeyKind::AutoIncrement));
        assert!(!key_matches("0", PrimaryKeyKind::AutoIncrement));
        assert!(!key_matches("-3", PrimaryKeyKind::AutoIncrement));
        assert!(key_matches(
            "01hv4z2wqxkjnm8gpqy6vbkc3d",
            PrimaryKeyKind::Ulid
        ));
        assert!(!key_matches(
            "01HV4Z2WQXKJNM8GPQY6VBKC3D",
            PrimaryKeyKind::Ulid
        ));
        assert!(key_matches(
            "9b2e0c1a-5f4d-4e8b-a1c3-7d6f5e4b3a21",
            PrimaryKeyKind::Uuid
        ));
        assert!(!key_matches("42", PrimaryKeyKind::Uuid));
    }
}
