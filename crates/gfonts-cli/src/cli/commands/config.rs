//! `gfonts config` – store a token or show the configuration.

use anyhow::Result;
use gfonts_core::config::{self, GfontsConfig};
use gfonts_core::installer;

pub async fn run_config(mut cfg: GfontsConfig, token: Option<String>) -> Result<()> {
    let path = config::config_path()?;
    match token {
        Some(token) => {
            cfg.token = Some(token.trim().to_string());
            config::save_to(&path, &cfg)?;
            tracing::info!(path = %path.display(), "stored access token");
            println!("Saved access token to {}", path.display());
        }
        None => {
            let token_state = if cfg.resolve_token(None).is_some() {
                "set"
            } else {
                "not set"
            };
            let install_dir = match &cfg.install_dir {
                Some(dir) => dir.display().to_string(),
                None => installer::determine_install_dir()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|e| format!("<{e}>")),
            };
            println!("Config file:  {}", path.display());
            println!("Access token: {token_state}");
            println!("Catalog:      {}", cfg.api_settings().catalog_url());
            println!("Install dir:  {install_dir}");
        }
    }
    Ok(())
}
