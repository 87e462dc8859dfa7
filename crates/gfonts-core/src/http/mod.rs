//! Blocking HTTP GET over libcurl.
//!
//! Shared easy-handle setup for the API listings and the font downloads.

use std::str;
use std::time::Duration;

/// Sent on every request; the GitHub API rejects requests without one.
pub const USER_AGENT: &str = concat!("gfonts/", env!("CARGO_PKG_VERSION"));

/// Overall limit for one API listing request.
const API_TIMEOUT: Duration = Duration::from_secs(60);

/// Status code and full body of a buffered GET.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Applies the options every request uses: URL, redirects, user agent,
/// connect timeout.
pub(crate) fn configure(
    easy: &mut curl::easy::Easy,
    url: &str,
    connect_timeout: Duration,
) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(connect_timeout)?;
    Ok(())
}

/// Performs a GET and buffers the body. Non-2xx statuses are not errors here;
/// callers decide what a status means.
pub fn get(
    url: &str,
    headers: &[String],
    connect_timeout: Duration,
) -> Result<Response, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, connect_timeout)?;
    easy.timeout(API_TIMEOUT)?;

    if !headers.is_empty() {
        let mut list = curl::easy::List::new();
        for h in headers {
            list.append(h)?;
        }
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET completed");
    Ok(Response { status, body })
}

/// Parses a `Content-Length` header line. Returns `None` for any other line.
pub(crate) fn content_length(line: &[u8]) -> Option<u64> {
    let line = str::from_utf8(line).ok()?.trim();
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<u64>().ok()
}

/// True for the status line that starts each response header block
/// (one per redirect hop).
pub(crate) fn is_status_line(line: &[u8]) -> bool {
    line.starts_with(b"HTTP/")
}
