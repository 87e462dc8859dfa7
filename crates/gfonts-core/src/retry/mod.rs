//! Retry policy for font downloads.
//!
//! Every transfer failure (timeout, connection error, any non-2xx status) is
//! retried the same way: a fixed delay, then the whole request again from
//! scratch. Failures are still classified so logs can tell a timeout from a
//! permanent 404.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status, ErrorKind};
pub use error::TransferError;
pub use policy::{RetryDecision, RetryPolicy};
pub use run::{run_with_retry, RetryError};
