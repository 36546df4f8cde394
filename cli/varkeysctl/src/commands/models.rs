//! Models command - list the key map.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use varkeys_registry::KeyRegistry;

use crate::output::print_output;

use super::CommandContext;

/// List the models in the key map.
#[derive(Debug, Args)]
pub struct ModelsCommand {}

#[derive(Debug, Serialize, Tabled)]
struct ModelRow {
    #[tabled(rename = "MODEL")]
    model: String,
    #[tabled(rename = "PRIMARY KEY")]
    primary_key: String,
    #[tabled(rename = "MORPH")]
    morph: String,
}

impl ModelsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let registry = ctx.registry()?;
        print_output(&model_rows(&registry), ctx.format);
        Ok(())
    }
}

fn model_rows(registry: &KeyRegistry) -> Vec<ModelRow> {
    registry
        .models()
        .map(|(model, reg)| ModelRow {
            model: model.to_string(),
            primary_key: reg
                .primary_key
                .map_or_else(|| "-".to_string(), |k| k.to_string()),
            morph: reg.morph.map_or_else(|| "-".to_string(), |k| k.to_string()),
        })
        .collect()
}
