//! Per-user config and state locations.
//!
//! XDG base directories on Unix; the platform equivalents from `dirs`
//! everywhere else.

use anyhow::Result;
use std::path::PathBuf;

pub const APP_NAME: &str = "gfonts";

/// Path of `config.toml`, creating its parent directory if needed.
#[cfg(unix)]
pub fn config_file() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

#[cfg(not(unix))]
pub fn config_file() -> Result<PathBuf> {
    use anyhow::Context;
    let dir = dirs::config_dir()
        .context("no config directory for this user")?
        .join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("config.toml"))
}

/// Directory for the log file (not created).
#[cfg(unix)]
pub fn state_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.get_state_home())
}

#[cfg(not(unix))]
pub fn state_dir() -> Result<PathBuf> {
    use anyhow::Context;
    Ok(dirs::data_local_dir()
        .context("no local data directory for this user")?
        .join(APP_NAME))
}
