//! Font installer: resolves families through the catalog client, then
//! downloads every file sequentially into the fonts directory.

mod download;
mod error;
mod platform;
mod progress;

pub use download::{download_and_install, DownloadOutcome, DownloadSettings, CHUNK_SIZE};
pub use error::InstallError;
pub use platform::{determine_install_dir, install_dir_for};
pub use progress::{DownloadProgress, SilentProgress};

use crate::catalog::{list_family_names, CatalogClient, FontFamilyEntry, FontFileEntry};
use std::fs;
use std::path::PathBuf;

/// Result of a completed batch.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Paths of the files written.
    pub installed: Vec<PathBuf>,
    /// Names of files given up on after exhausting retries.
    pub skipped: Vec<String>,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.installed.len() + self.skipped.len()
    }
}

pub struct Installer<'a> {
    catalog: &'a CatalogClient,
    install_dir: PathBuf,
    settings: DownloadSettings,
    progress: &'a dyn DownloadProgress,
}

impl<'a> Installer<'a> {
    pub fn new(
        catalog: &'a CatalogClient,
        install_dir: PathBuf,
        settings: DownloadSettings,
        progress: &'a dyn DownloadProgress,
    ) -> Self {
        Self {
            catalog,
            install_dir,
            settings,
            progress,
        }
    }

    /// Installs the `.ttf` files of every family in `names`.
    ///
    /// All families are resolved before the first download, so an unknown
    /// family aborts the batch with nothing written. With `force`, names are
    /// not checked against the catalog and the catalog is not fetched.
    pub fn install_fonts(
        &self,
        names: &[String],
        force: bool,
    ) -> Result<InstallReport, InstallError> {
        self.ensure_install_dir()?;
        let catalog = if force {
            Vec::new()
        } else {
            self.catalog.fetch_catalog()?
        };
        self.install_from(&catalog, names, force)
    }

    /// Installs every family in the catalog.
    pub fn install_all_fonts(&self) -> Result<InstallReport, InstallError> {
        self.ensure_install_dir()?;
        let catalog = self.catalog.fetch_catalog()?;
        let names = list_family_names(&catalog);
        self.install_from(&catalog, &names, false)
    }

    fn ensure_install_dir(&self) -> Result<(), InstallError> {
        fs::create_dir_all(&self.install_dir).map_err(|source| InstallError::Io {
            path: self.install_dir.clone(),
            source,
        })
    }

    fn install_from(
        &self,
        catalog: &[FontFamilyEntry],
        names: &[String],
        force: bool,
    ) -> Result<InstallReport, InstallError> {
        let mut queue: Vec<FontFileEntry> = Vec::new();
        for name in names {
            self.progress.resolving(name);
            let files = self
                .catalog
                .resolve_downloads_for_family(catalog, name, force)?;
            queue.extend(files);
        }
        tracing::info!(
            families = names.len(),
            files = queue.len(),
            dir = %self.install_dir.display(),
            "resolved font files"
        );
        self.progress.queued(queue.len());

        let mut report = InstallReport::default();
        for item in &queue {
            match download_and_install(
                &item.name,
                &item.download_url,
                &self.install_dir,
                &self.settings,
                self.progress,
            )? {
                DownloadOutcome::Installed { path, .. } => report.installed.push(path),
                DownloadOutcome::Skipped { .. } => report.skipped.push(item.name.clone()),
            }
        }
        Ok(report)
    }
}
