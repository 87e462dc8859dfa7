//! CLI for the gfonts installer.

mod commands;
mod progress;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gfonts_core::catalog::CatalogError;
use gfonts_core::config;
use gfonts_core::installer::InstallError;

use commands::{run_config, run_install, run_list, InstallTarget};

/// Top-level CLI for the gfonts installer.
#[derive(Debug, Parser)]
#[command(name = "gfonts")]
#[command(about = "Install Google Fonts families into your user fonts directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Access token for the contents API.
#[derive(Debug, Clone, Default, Args)]
pub struct TokenArg {
    /// GitHub access token (overrides the one stored with `gfonts config`).
    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List every font family in the catalog.
    List {
        #[command(flatten)]
        auth: TokenArg,
    },

    /// Download and install font families.
    Install {
        /// Family names as listed by `gfonts list` (e.g. abeezee).
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        names: Vec<String>,

        /// Install every family in the catalog.
        #[arg(long)]
        all: bool,

        /// Skip the catalog check and fetch the family listing by name.
        #[arg(long, short, conflicts_with = "all")]
        force: bool,

        #[command(flatten)]
        auth: TokenArg,
    },

    /// Store an access token, or show the current configuration.
    Config {
        /// Token to save in config.toml.
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },
}

/// Parse CLI arguments, load the config and dispatch.
pub async fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", redacted(&cfg));

    match cli.command {
        CliCommand::List { auth } => run_list(&cfg, auth.token).await?,
        CliCommand::Install {
            names,
            all,
            force,
            auth,
        } => {
            let target = if all {
                InstallTarget::All
            } else {
                InstallTarget::Families { names, force }
            };
            run_install(&cfg, auth.token, target).await?;
        }
        CliCommand::Config { token } => run_config(cfg, token).await?,
    }

    Ok(())
}

fn redacted(cfg: &config::GfontsConfig) -> config::GfontsConfig {
    let mut cfg = cfg.clone();
    if cfg.token.is_some() {
        cfg.token = Some("<redacted>".to_string());
    }
    cfg
}

/// Follow-up advice printed under a fatal error.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let catalog = err.chain().find_map(|e| {
        e.downcast_ref::<CatalogError>()
            .or_else(|| match e.downcast_ref::<InstallError>() {
                Some(InstallError::Catalog(c)) => Some(c),
                _ => None,
            })
    })?;
    match catalog {
        CatalogError::CatalogRejected { .. } => Some(
            "Set a GitHub token with `gfonts config --token <TOKEN>`, \
             or pass `--token <TOKEN>` for a single run.",
        ),
        CatalogError::FamilyNotFound(_) => {
            Some("Use `gfonts list` to see the available families.")
        }
        CatalogError::ListingNotFound(_) | CatalogError::NoFontFiles(_) => Some("Please retry."),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
