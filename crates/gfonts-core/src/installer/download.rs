//! Streaming download of one font file with bounded retries.

use super::progress::DownloadProgress;
use super::InstallError;
use crate::http;
use crate::retry::{classify, run_with_retry, RetryPolicy, TransferError};
use std::cell::Cell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Bytes handed to the file per write callback.
pub const CHUNK_SIZE: usize = 1024;

/// Transfer parameters for font downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSettings {
    pub retry: RetryPolicy,
    /// Connect timeout; also the longest a transfer may stall without data.
    pub connect_timeout: Duration,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// What happened to one font file.
#[derive(Debug)]
pub enum DownloadOutcome {
    Installed { path: PathBuf, bytes: u64 },
    /// Every attempt failed; the batch goes on without this file.
    Skipped { attempts: u32, error: TransferError },
}

/// Downloads `url` to `install_dir/name`, retrying the whole request on any
/// transport or HTTP failure.
///
/// Exhausted retries are not an error: the file is logged and reported as
/// [`DownloadOutcome::Skipped`]. Only a failure to write the file is returned
/// as `Err`.
pub fn download_and_install(
    name: &str,
    url: &str,
    install_dir: &Path,
    settings: &DownloadSettings,
    progress: &dyn DownloadProgress,
) -> Result<DownloadOutcome, InstallError> {
    let path = install_dir.join(name);
    let max_attempts = settings.retry.max_attempts.max(1);
    // Set once an attempt has truncated `path`; until then it holds the user's copy.
    let truncated = Cell::new(false);

    let result = run_with_retry(
        &settings.retry,
        |attempt| {
            tracing::debug!(file = name, attempt, max_attempts, url, "downloading");
            progress.attempt(name, attempt, max_attempts);
            fetch_once(name, url, &path, settings.connect_timeout, progress, &truncated)
        },
        |attempt, e, delay| {
            let kind = classify(e);
            tracing::warn!(
                file = name,
                attempt,
                ?kind,
                permanent = kind.is_permanent(),
                "download failed, retrying in {:?}: {}",
                delay,
                e
            );
            progress.retrying(name, e, delay);
        },
    );

    match result {
        Ok(bytes) => {
            tracing::info!(file = name, bytes, dir = %install_dir.display(), "installed");
            progress.installed(name, install_dir);
            Ok(DownloadOutcome::Installed { path, bytes })
        }
        Err(err) => match err.last {
            TransferError::Storage(source) => Err(InstallError::Io { path, source }),
            last => {
                tracing::error!(file = name, attempts = err.attempts, "giving up: {}", last);
                if truncated.get() {
                    discard_partial(&path);
                }
                progress.gave_up(name, err.attempts, &last);
                Ok(DownloadOutcome::Skipped {
                    attempts: err.attempts,
                    error: last,
                })
            }
        },
    }
}

/// One GET of `url`, body streamed to `path` in chunks of at most
/// [`CHUNK_SIZE`] bytes. The file is created (truncated) with the first chunk,
/// so a failed request leaves an existing file untouched; `truncated` records
/// when that happened.
fn fetch_once(
    name: &str,
    url: &str,
    path: &Path,
    connect_timeout: Duration,
    progress: &dyn DownloadProgress,
    truncated: &Cell<bool>,
) -> Result<u64, TransferError> {
    let content_length: Cell<Option<u64>> = Cell::new(None);
    let mut file: Option<File> = None;
    let mut written = 0u64;
    let mut storage_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    http::configure(&mut easy, url, connect_timeout).map_err(TransferError::Curl)?;
    // Non-2xx answers fail the transfer before any body byte is written.
    easy.fail_on_error(true).map_err(TransferError::Curl)?;
    easy.buffer_size(CHUNK_SIZE).map_err(TransferError::Curl)?;
    // Abort if no data arrives for `connect_timeout`.
    easy.low_speed_limit(1).map_err(TransferError::Curl)?;
    easy.low_speed_time(connect_timeout).map_err(TransferError::Curl)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                if http::is_status_line(line) {
                    content_length.set(None);
                } else if let Some(len) = http::content_length(line) {
                    content_length.set(Some(len));
                }
                true
            })
            .map_err(TransferError::Curl)?;
        transfer
            .write_function(|data| {
                let total = content_length.get().unwrap_or(0);
                if file.is_none() {
                    match File::create(path) {
                        Ok(f) => {
                            truncated.set(true);
                            file = Some(f);
                        }
                        Err(e) => {
                            storage_error = Some(e);
                            return Ok(0); // abort transfer
                        }
                    }
                    progress.started(name, total);
                }
                let Some(f) = file.as_mut() else {
                    return Ok(0);
                };
                if let Err(e) = f.write_all(data) {
                    storage_error = Some(e);
                    return Ok(0);
                }
                written += data.len() as u64;
                progress.advanced(written, total);
                Ok(data.len())
            })
            .map_err(TransferError::Curl)?;
        transfer.perform()
    };

    if let Some(e) = storage_error {
        return Err(TransferError::Storage(e));
    }
    if let Err(e) = performed {
        if e.is_http_returned_error() {
            let code = easy.response_code().unwrap_or(0);
            return Err(TransferError::Http(code));
        }
        return Err(TransferError::Curl(e));
    }

    let code = easy.response_code().map_err(TransferError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(TransferError::Http(code));
    }

    match file {
        Some(mut f) => f.flush().map_err(TransferError::Storage)?,
        None => {
            // Empty body: still install an empty file.
            File::create(path).map_err(TransferError::Storage)?;
            progress.started(name, 0);
        }
    }
    Ok(written)
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "could not remove partial file: {}", e),
    }
}
