//! CLI command handlers, one file per command.

mod config;
mod install;
mod list;

pub use config::run_config;
pub use install::{run_install, InstallTarget};
pub use list::run_list;

use gfonts_core::catalog::CatalogClient;
use gfonts_core::config::GfontsConfig;

/// Catalog client for this run; an explicit token wins over the stored one.
fn catalog_client(cfg: &GfontsConfig, token: Option<String>) -> CatalogClient {
    CatalogClient::new(cfg.api_settings(), cfg.resolve_token(token))
}
