//! Retry loop: run a closure until success or the policy says stop.

use super::error::TransferError;
use super::policy::{RetryDecision, RetryPolicy};
use std::fmt;
use std::time::Duration;

/// The last failure after the policy gave up.
#[derive(Debug)]
pub struct RetryError {
    /// Number of attempts made, including the failed last one.
    pub attempts: u32,
    pub last: TransferError,
}

impl fmt::Display for RetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gave up after {} attempt(s): {}", self.attempts, self.last)
    }
}

impl std::error::Error for RetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.last)
    }
}

/// Runs `f` (given the 1-based attempt number) until it succeeds or the policy
/// says to stop. `on_retry` is called before each sleep. Storage errors are
/// returned immediately.
pub fn run_with_retry<T, F, R>(policy: &RetryPolicy, f: F, on_retry: R) -> Result<T, RetryError>
where
    F: FnMut(u32) -> Result<T, TransferError>,
    R: FnMut(u32, &TransferError, Duration),
{
    run_with_retry_and_sleep(policy, f, on_retry, std::thread::sleep)
}

pub(crate) fn run_with_retry_and_sleep<T, F, R, S>(
    policy: &RetryPolicy,
    mut f: F,
    mut on_retry: R,
    mut sleep: S,
) -> Result<T, RetryError>
where
    F: FnMut(u32) -> Result<T, TransferError>,
    R: FnMut(u32, &TransferError, Duration),
    S: FnMut(Duration),
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let decision = if e.is_storage() {
                    RetryDecision::NoRetry
                } else {
                    policy.decide(attempt)
                };
                match decision {
                    RetryDecision::NoRetry => {
                        return Err(RetryError {
                            attempts: attempt,
                            last: e,
                        })
                    }
                    RetryDecision::RetryAfter(d) => {
                        on_retry(attempt, &e, d);
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
