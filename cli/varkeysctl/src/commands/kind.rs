//! Kind command - show one model's key kinds.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use varkeys_id::{KeyType, MorphKind, PrimaryKeyKind};
use varkeys_registry::{KeyRegistry, RegistryError};

use crate::output::print_single;

use super::CommandContext;

/// Show the key kinds registered for a model.
#[derive(Debug, Args)]
pub struct KindCommand {
    /// Model identifier as written in the key map.
    model: String,
}

#[derive(Debug, Serialize)]
struct ModelKinds {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_key: Option<PrimaryKeyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    incrementing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_type: Option<KeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    morph: Option<MorphKind>,
}

impl KindCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let registry = ctx.registry()?;
        let kinds = model_kinds(&registry, &self.model)?;

        print_single(&kinds, ctx.format);
        Ok(())
    }
}

/// Partial entries are shown with the kinds they have; only an unknown
/// model is an error.
fn model_kinds(registry: &KeyRegistry, model: &str) -> Result<ModelKinds, RegistryError> {
    let primary_key = match registry.primary_key_kind(model) {
        Ok(kind) => Some(kind),
        Err(_) if registry.is_registered(model) => None,
        Err(err) => return Err(err),
    };

    Ok(ModelKinds {
        model: model.to_string(),
        primary_key,
        incrementing: primary_key.map(|kind| kind.is_incrementing()),
        key_type: primary_key.map(|kind| kind.key_type()),
        morph: registry.morph_kind(model).ok(),
    })
}
