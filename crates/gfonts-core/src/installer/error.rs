use crate::catalog::CatalogError;
use std::path::PathBuf;

/// Fatal installer error. Per-file download failures are not errors; they end
/// up as skipped files in the report.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("could not determine the {0} directory")]
    MissingDirectory(&'static str),

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
