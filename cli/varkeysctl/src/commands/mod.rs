//! CLI commands.

mod check;
mod ddl;
mod generate;
mod kind;
mod models;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use varkeys_registry::{KeyRegistry, RegistryConfig};

use crate::error::CliError;
use crate::output::OutputFormat;

/// varkeys CLI - Generate keys and inspect per-model key kinds.
#[derive(Debug, Parser)]
#[command(name = "vk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Key map file (TOML).
    #[arg(long, global = true, env = "VARKEYS_MAP")]
    map: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fresh keys of a kind.
    Generate(generate::GenerateCommand),

    /// List the models in the key map.
    Models(models::ModelsCommand),

    /// Show the key kinds registered for a model.
    Kind(kind::KindCommand),

    /// Preview PostgreSQL DDL for a table keyed like a model.
    Ddl(ddl::DdlCommand),

    /// Check that a key string matches a kind.
    Check(check::CheckCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Install the stderr log subscriber (prefer RUST_LOG, fallback to --log-level).
    pub fn init_tracing(&self) {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| self.log_level.clone().into()))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        let ctx = CommandContext {
            format,
            map: self.map,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Models(cmd) => cmd.run(ctx),
            Commands::Kind(cmd) => cmd.run(ctx),
            Commands::Ddl(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("vk {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub map: Option<PathBuf>,
}

impl CommandContext {
    /// Load the registry from the key map.
    pub fn registry(&self) -> Result<KeyRegistry> {
        let path = self.map.as_ref().ok_or(CliError::NoKeyMap)?;
        let config = RegistryConfig::load(path)
            .with_context(|| format!("Failed to load key map from {}", path.display()))?;

        debug!(models = config.models.len(), "Key map loaded");
        Ok(config.into_registry())
    }
}

/// Splits a `<left>=<right>` argument.
fn split_pair(arg: &str) -> Result<(&str, &str), CliError> {
    match arg.split_once('=') {
        Some((left, right)) if !left.is_empty() && !right.is_empty() => Ok((left, right)),
        _ => Err(CliError::InvalidPair(arg.to_string())),
    }
}
