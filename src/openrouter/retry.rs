// Bounded retry for the completion call
//
// Only malformed-response failures are retried; network and unexpected
// failures abort on the first occurrence.

use std::time::Duration;
use tokio::time::sleep;

use super::error::ChatError;

const RETRY_DELAY_MS: u64 = 500;

/// Run `f` up to `max_attempts` times, sleeping a fixed delay between
/// retryable failures.
pub async fn with_retry<F, Fut, T>(max_attempts: u32, f: F) -> Result<T, ChatError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, ChatError>>,
{
    let attempts = max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() => {
                tracing::warn!(
                    "completion attempt {}/{} failed: {}",
                    attempt,
                    attempts,
                    e
                );
                last_error = Some(e);

                if attempt < attempts {
                    sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error
        .unwrap_or_else(|| ChatError::Unexpected("retry loop made no attempts".to_string())))
}
