use std::future::Future;

use tokio::time::sleep;

use crate::{Result, RetryPolicy};

/// Runs `operation` up to `policy.max_attempts` times with exponential backoff
/// between attempts.
///
/// Every failure is treated as retryable; there is no error classification.
/// The backoff runs between attempts only, never after the final one, and an
/// exhausted sequence surfaces the error of the last attempt unchanged.
pub async fn retry<T, F, Fut>(mut operation: F, policy: RetryPolicy) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= max_attempts {
                    tracing::error!(%error, attempt, "retry attempts exhausted");
                    return Err(error);
                }
                let delay = policy.delay_for(attempt);
                tracing::debug!(
                    %error,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed, retrying after backoff"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
