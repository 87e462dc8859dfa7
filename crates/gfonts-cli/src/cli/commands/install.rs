//! `gfonts install` – download families into the fonts directory.

use anyhow::{Context, Result};
use gfonts_core::config::GfontsConfig;
use gfonts_core::installer::{self, Installer};

use super::catalog_client;
use crate::cli::progress::ConsoleProgress;

/// What to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    All,
    Families { names: Vec<String>, force: bool },
}

pub async fn run_install(
    cfg: &GfontsConfig,
    token: Option<String>,
    target: InstallTarget,
) -> Result<()> {
    let client = catalog_client(cfg, token);
    let install_dir = match &cfg.install_dir {
        Some(dir) => dir.clone(),
        None => installer::determine_install_dir()?,
    };
    let settings = cfg.download_settings();
    tracing::info!(dir = %install_dir.display(), ?target, "install requested");

    let report = tokio::task::spawn_blocking(move || {
        let progress = ConsoleProgress::new();
        let installer = Installer::new(&client, install_dir, settings, &progress);
        match target {
            InstallTarget::All => installer.install_all_fonts(),
            InstallTarget::Families { names, force } => installer.install_fonts(&names, force),
        }
    })
    .await
    .context("install task join")??;

    println!(
        "Installed {} of {} font file(s).",
        report.installed.len(),
        report.total()
    );
    if !report.skipped.is_empty() {
        println!("Skipped after repeated failures:");
        for name in &report.skipped {
            println!("  {name}");
        }
    }
    Ok(())
}
