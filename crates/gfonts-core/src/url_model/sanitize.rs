//! Filename sanitization for the fonts directory.

/// Makes a decoded filename safe to join onto the install directory.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Trims surrounding whitespace
/// - Limits length to 255 bytes (NAME_MAX)
///
/// Inner spaces are kept: `Noto Sans.ttf` stays as is.
pub fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let out: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = out.trim();

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
