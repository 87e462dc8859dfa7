//! `gfonts list` – print every family in the catalog.

use anyhow::{Context, Result};
use gfonts_core::catalog::list_family_names;
use gfonts_core::config::GfontsConfig;

use super::catalog_client;

pub async fn run_list(cfg: &GfontsConfig, token: Option<String>) -> Result<()> {
    let client = catalog_client(cfg, token);
    let catalog = tokio::task::spawn_blocking(move || client.fetch_catalog())
        .await
        .context("catalog task join")??;
    for name in list_family_names(&catalog) {
        println!("{name}");
    }
    tracing::info!(families = catalog.len(), "listed catalog");
    Ok(())
}
