//! Console progress for font downloads.

use gfonts_core::installer::DownloadProgress;
use gfonts_core::retry::TransferError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// One byte-count bar per file, plus status lines above it.
#[derive(Default)]
pub struct ConsoleProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner} {msg} {bytes} ({bytes_per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Prints a line without tearing the active bar.
    fn line(&self, msg: String) {
        match self.bar.lock().ok().and_then(|b| b.clone()) {
            Some(bar) => bar.println(msg),
            None => println!("{msg}"),
        }
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut b| b.take())
    }
}

impl DownloadProgress for ConsoleProgress {
    fn resolving(&self, family: &str) {
        self.line(format!("Fetching font files for {family}"));
    }

    fn queued(&self, files: usize) {
        self.line(format!("Downloading {files} font file(s)"));
    }

    fn attempt(&self, name: &str, attempt: u32, max_attempts: u32) {
        self.line(format!(
            "Downloading {name} (attempt {attempt}/{max_attempts})..."
        ));
    }

    fn started(&self, name: &str, total_bytes: u64) {
        let bar = if total_bytes > 0 {
            let bar = ProgressBar::new(total_bytes);
            bar.set_style(Self::bar_style());
            bar
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar
        };
        bar.set_message(format!("Installing {name}"));
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(old) = slot.replace(bar) {
                old.finish_and_clear();
            }
        }
    }

    fn advanced(&self, bytes_done: u64, _total_bytes: u64) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.set_position(bytes_done);
            }
        }
    }

    fn installed(&self, name: &str, dir: &Path) {
        if let Some(bar) = self.take_bar() {
            bar.finish_and_clear();
        }
        println!("{name} installed successfully at {}", dir.display());
    }

    fn retrying(&self, name: &str, error: &TransferError, delay: Duration) {
        if let Some(bar) = self.take_bar() {
            bar.abandon();
        }
        eprintln!("Error downloading {name}: {error}");
        eprintln!("Retrying in {} seconds...", delay.as_secs());
    }

    fn gave_up(&self, name: &str, attempts: u32, _error: &TransferError) {
        if let Some(bar) = self.take_bar() {
            bar.abandon();
        }
        eprintln!("Failed to install {name} after {attempts} attempts.");
    }
}
