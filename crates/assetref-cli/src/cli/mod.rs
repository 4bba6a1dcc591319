//! CLI for inspecting how media references resolve.

mod commands;

use anyhow::Result;
use assetref_core::config::{self, AssetConfig};
use clap::{Parser, Subcommand, ValueEnum};

use commands::{run_origins, run_product, run_resolve};

/// Top-level CLI for assetref.
#[derive(Debug, Parser)]
#[command(name = "assetref")]
#[command(about = "Resolve storefront media references into loadable URLs", long_about = None)]
pub struct Cli {
    /// Override the configured API origin (e.g. https://api.example.com/api).
    #[arg(long, global = true, value_name = "URL")]
    pub api_origin: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How many candidates `resolve` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Best-guess URL only.
    #[default]
    Simple,
    /// Primary and fallback URL.
    Pair,
    /// Every candidate in retry order.
    Candidates,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a single reference (plain string, or a JSON value such as `{"path":"..."}`).
    Resolve {
        reference: String,

        #[arg(long, value_enum, default_value_t = Mode::Simple)]
        mode: Mode,

        /// Print JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Extract the listing image from a product JSON file.
    Product {
        /// Path to a JSON file holding one product record.
        path: String,
    },

    /// Show the API and asset origins in effect.
    Origins,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = effective_config(cli.api_origin)?;
        tracing::debug!("effective config: {:?}", cfg);

        cli.command.run(&cfg)
    }

    fn run(self, cfg: &AssetConfig) -> Result<()> {
        let resolver = cfg.resolver()?;
        match self {
            CliCommand::Resolve {
                reference,
                mode,
                json,
            } => run_resolve(&resolver, &reference, mode, json),
            CliCommand::Product { path } => run_product(&resolver, std::path::Path::new(&path)),
            CliCommand::Origins => run_origins(&resolver),
        }
    }
}

/// `--api-origin` replaces the config file entirely; the file is only read
/// (or created) when no origin was passed.
pub(crate) fn effective_config(api_origin: Option<String>) -> Result<AssetConfig> {
    match api_origin {
        Some(api_origin) => Ok(AssetConfig { api_origin }),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
