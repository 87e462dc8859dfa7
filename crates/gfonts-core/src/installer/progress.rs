//! Progress reporting hooks for the installer.

use crate::retry::TransferError;
use std::path::Path;
use std::time::Duration;

/// Receives installer events, e.g. to drive a progress bar. Every method has a
/// no-op default.
pub trait DownloadProgress {
    /// About to resolve the files of a family.
    fn resolving(&self, _family: &str) {}

    /// All families resolved; `files` downloads follow.
    fn queued(&self, _files: usize) {}

    /// Starting attempt `attempt` of `max_attempts` for a file.
    fn attempt(&self, _name: &str, _attempt: u32, _max_attempts: u32) {}

    /// First body bytes arrived. `total_bytes` is 0 when the length is unknown.
    fn started(&self, _name: &str, _total_bytes: u64) {}

    /// Cumulative bytes written so far for the current file.
    fn advanced(&self, _bytes_done: u64, _total_bytes: u64) {}

    fn installed(&self, _name: &str, _dir: &Path) {}

    /// An attempt failed; the next one starts after `delay`.
    fn retrying(&self, _name: &str, _error: &TransferError, _delay: Duration) {}

    /// All attempts failed; the file is skipped.
    fn gave_up(&self, _name: &str, _attempts: u32, _error: &TransferError) {}
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl DownloadProgress for SilentProgress {}
