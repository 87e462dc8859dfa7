//! Per-OS fonts directory.

use super::InstallError;
use std::path::PathBuf;

/// Fonts directory for the current user on this OS.
///
/// Linux `~/.fonts`, macOS `~/Library/Fonts`, Windows
/// `%LOCALAPPDATA%\Microsoft\Windows\Fonts`. Anything else is an error.
pub fn determine_install_dir() -> Result<PathBuf, InstallError> {
    let local_app_data = if cfg!(windows) {
        std::env::var_os("LOCALAPPDATA")
            .map(PathBuf::from)
            .or_else(dirs::data_local_dir)
    } else {
        None
    };
    install_dir_for(std::env::consts::OS, dirs::home_dir(), local_app_data)
}

/// Same as [`determine_install_dir`] with the OS name (`std::env::consts::OS`
/// values) and base directories given explicitly.
pub fn install_dir_for(
    os: &str,
    home: Option<PathBuf>,
    local_app_data: Option<PathBuf>,
) -> Result<PathBuf, InstallError> {
    match os {
        "linux" => Ok(home
            .ok_or(InstallError::MissingDirectory("home"))?
            .join(".fonts")),
        "macos" => Ok(home
            .ok_or(InstallError::MissingDirectory("home"))?
            .join("Library")
            .join("Fonts")),
        "windows" => Ok(local_app_data
            .ok_or(InstallError::MissingDirectory("LOCALAPPDATA"))?
            .join("Microsoft")
            .join("Windows")
            .join("Fonts")),
        other => Err(InstallError::UnsupportedPlatform(other.to_string())),
    }
}
