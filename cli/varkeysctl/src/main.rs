//! varkeysctl (vk) - CLI for variable key maps
//!
//! Generates keys, inspects key maps, and previews the DDL a migration
//! produces for a model's configured key kinds.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
