//! Generate command - print fresh keys.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use varkeys_id::{KeyValue, PrimaryKeyKind};

use crate::output::{print_info, print_output};

use super::CommandContext;

/// Generate fresh keys of a kind.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Key kind (auto_increment, ulid, uuid).
    kind: PrimaryKeyKind,

    /// Number of keys to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Serialize, Tabled)]
struct GeneratedKey {
    #[tabled(rename = "KIND")]
    kind: PrimaryKeyKind,
    #[tabled(rename = "KEY")]
    key: String,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        if self.kind.is_incrementing() {
            print_info("auto_increment keys are assigned by the database; nothing to generate.");
            return Ok(());
        }

        let keys = generate_keys(self.kind, self.count);
        print_output(&keys, ctx.format);
        Ok(())
    }
}

fn generate_keys(kind: PrimaryKeyKind, count: usize) -> Vec<GeneratedKey> {
    (0..count)
        .filter_map(|_| KeyValue::generate(kind).into_value())
        .map(|key| GeneratedKey { kind, key })
        .collect()
}
