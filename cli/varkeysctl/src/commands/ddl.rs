//! DDL command - preview the statements a migration would run.
//!
//! The table gets a primary key of the model's kind, plus any requested
//! foreign keys and morph pairs, each typed from the key map.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use varkeys_registry::KeyRegistry;
use varkeys_schema::{Blueprint, DefaultMorphKey, VariableKeys};

use crate::output::{print_single, OutputFormat};

use super::{split_pair, CommandContext};

/// Preview PostgreSQL DDL for a table keyed like a model.
#[derive(Debug, Args)]
pub struct DdlCommand {
    /// Table name.
    table: String,

    /// Model whose primary-key kind the table uses.
    #[arg(long)]
    model: String,

    /// Foreign key as `<column>=<model>`, typed from the referenced model.
    #[arg(long = "foreign", value_name = "COLUMN=MODEL")]
    foreign: Vec<String>,

    /// Morph pair as `<name>=<model>`, typed from the model's morph kind.
    #[arg(long = "morph", value_name = "NAME=MODEL")]
    morphs: Vec<String>,

    /// Make morph columns nullable.
    #[arg(long)]
    nullable_morphs: bool,

    /// Id type for generic (string) morphs.
    #[arg(long, value_enum, default_value_t = MorphKeyArg::Int)]
    default_morph_key: MorphKeyArg,
}

/// Values accepted by `--default-morph-key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MorphKeyArg {
    Int,
    Uuid,
    Ulid,
}

impl From<MorphKeyArg> for DefaultMorphKey {
    fn from(arg: MorphKeyArg) -> Self {
        match arg {
            MorphKeyArg::Int => DefaultMorphKey::Int,
            MorphKeyArg::Uuid => DefaultMorphKey::Uuid,
            MorphKeyArg::Ulid => DefaultMorphKey::Ulid,
        }
    }
}

#[derive(Debug, Serialize)]
struct DdlPreview {
    table: String,
    statements: Vec<String>,
}

impl DdlCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let registry = ctx.registry()?;
        let statements = self.build(&registry)?.to_sql()?;

        match ctx.format {
            OutputFormat::Table => {
                for statement in &statements {
                    println!("{statement};");
                }
            }
            OutputFormat::Json => print_single(
                &DdlPreview {
                    table: self.table,
                    statements,
                },
                ctx.format,
            ),
        }

        Ok(())
    }

    fn build(&self, registry: &KeyRegistry) -> Result<Blueprint> {
        let mut table =
            Blueprint::new(&self.table).with_default_morph_key(self.default_morph_key.into());

        table.variable_primary_key_default(registry.primary_key_kind(&self.model)?);

        for arg in &self.foreign {
            let (column, model) = split_pair(arg)?;
            table
                .variable_foreign_key(column, registry.primary_key_kind(model)?)
                .constrained(None);
        }

        for arg in &self.morphs {
            let (name, model) = split_pair(arg)?;
            table.variable_morphs(name, registry.morph_kind(model)?, self.nullable_morphs);
        }

        Ok(table)
    }
}
