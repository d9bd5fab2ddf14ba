//! Single-retry policy for outbound provider calls.

use std::fmt::Display;
use std::future::Future;

use tracing::warn;

use crate::error::BrainError;

/// Errors that may succeed on a second attempt.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for BrainError {
    fn is_retryable(&self) -> bool {
        self.is_transport()
    }
}

/// Run `attempt`, and run it exactly once more if the first error is
/// retryable. Status errors from the provider are returned as-is.
pub async fn retry_once<T, E, F, Fut>(operation: &str, mut attempt: F) -> Result<T, E>
where
    E: Retryable + Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match attempt().await {
        Err(err) if err.is_retryable() => {
            warn!("{} failed ({}), retrying once", operation, err);
            attempt().await
        }
        other => other,
    }
}
