//! Filename derivation for downloaded font files.
//!
//! The installed name is the last path segment of the download URL,
//! percent-decoded, with path separators and control characters replaced.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_file_name;

use percent_encoding::percent_decode_str;

/// Derives the local filename for a font from its download URL.
///
/// # Examples
///
/// - `.../ofl/abeezee/ABeeZee-Italic.ttf` → `"ABeeZee-Italic.ttf"`
/// - `.../ofl/noto/Noto%20Sans.ttf` → `"Noto Sans.ttf"`
///
/// Returns `None` when the URL has no usable last segment.
pub fn font_file_name(download_url: &str) -> Option<String> {
    let segment = last_path_segment(download_url)?;
    let decoded = percent_decode_str(&segment).decode_utf8_lossy();
    let name = sanitize_file_name(&decoded);
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}
