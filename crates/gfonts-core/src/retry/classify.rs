//! Classify HTTP status and curl errors for logging.
//!
//! The policy retries everything except storage failures; the kind only shows
//! up in log fields.

use super::error::TransferError;

/// High-level classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect or stalled read).
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// Server answered with 4xx; retrying will not help.
    HttpClient(u16),
    /// Server answered with 5xx, 408 or 429.
    HttpTransient(u16),
    /// Local write failure.
    Storage,
    Other,
}

impl ErrorKind {
    /// True when another attempt cannot succeed (e.g. 404).
    pub fn is_permanent(&self) -> bool {
        matches!(self, ErrorKind::HttpClient(_) | ErrorKind::Storage)
    }
}

/// Classify an HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    let code16 = u16::try_from(code).unwrap_or(u16::MAX);
    match code {
        408 | 429 | 500..=599 => ErrorKind::HttpTransient(code16),
        400..=499 => ErrorKind::HttpClient(code16),
        _ => ErrorKind::Other,
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

pub fn classify(e: &TransferError) -> ErrorKind {
    match e {
        TransferError::Curl(ce) => classify_curl_error(ce),
        TransferError::Http(code) => classify_http_status(*code),
        TransferError::Storage(_) => ErrorKind::Storage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_permanent() {
        assert_eq!(classify_http_status(404), ErrorKind::HttpClient(404));
        assert!(classify_http_status(404).is_permanent());
    }

    #[test]
    fn server_errors_and_throttling_are_transient() {
        assert_eq!(classify_http_status(503), ErrorKind::HttpTransient(503));
        assert_eq!(classify_http_status(429), ErrorKind::HttpTransient(429));
        assert!(!classify_http_status(500).is_permanent());
    }

    #[test]
    fn storage_is_permanent() {
        let e = TransferError::Storage(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(classify(&e), ErrorKind::Storage);
        assert!(classify(&e).is_permanent());
    }
}
