//! Font-file selection inside a family listing.

use super::types::{ContentEntry, FontFileEntry};
use crate::url_model;

/// Marker a listing path must contain to be installed.
pub const FONT_EXTENSION: &str = ".ttf";

/// True for listing paths that name a TrueType font. Case-sensitive substring
/// match: `.otf`, `.txt` and `LICENSE` are dropped.
pub fn is_font_path(path: &str) -> bool {
    path.contains(FONT_EXTENSION)
}

/// Keeps the font entries of a listing and resolves each to its filename and
/// download URL, preserving listing order.
pub(crate) fn font_files(entries: Vec<ContentEntry>) -> Vec<FontFileEntry> {
    entries
        .into_iter()
        .filter(|e| is_font_path(&e.path))
        .filter_map(|e| {
            let Some(download_url) = e.download_url else {
                tracing::debug!(path = %e.path, "font entry without download url, skipping");
                return None;
            };
            let Some(name) = url_model::font_file_name(&download_url) else {
                tracing::warn!(url = %download_url, "cannot derive a filename, skipping");
                return None;
            };
            Some(FontFileEntry { name, download_url })
        })
        .collect()
}
