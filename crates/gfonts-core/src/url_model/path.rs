//! Last path segment of a URL.

/// Extracts the last non-empty path segment of `url`, still percent-encoded.
///
/// Query and fragment are ignored. Strings that do not parse as URLs fall back
/// to splitting on `/`.
pub fn last_path_segment(url: &str) -> Option<String> {
    let segment = match url::Url::parse(url) {
        Ok(parsed) => parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .last()
            .map(str::to_string),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or("");
            path.rsplit('/').find(|s| !s.is_empty()).map(str::to_string)
        }
    }?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment)
}
