//! Error type for a single download attempt.

use std::fmt;

/// Error returned by one attempt at fetching a font file.
#[derive(Debug)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Writing the font file failed (e.g. disk full, permission denied). Not retried.
    Storage(std::io::Error),
}

impl TransferError {
    pub fn is_storage(&self) -> bool {
        matches!(self, TransferError::Storage(_))
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Curl(e) => write!(f, "{}", e),
            TransferError::Http(code) => write!(f, "HTTP {}", code),
            TransferError::Storage(e) => write!(f, "storage: {}", e),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::Curl(e) => Some(e),
            TransferError::Storage(e) => Some(e),
            TransferError::Http(_) => None,
        }
    }
}
