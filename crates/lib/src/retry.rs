//! Fixed-count retry with linear backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
  pub max_attempts: usize,
  pub base_backoff_ms: u64,
}

impl RetryPolicy {
  /// Policy for uploading a group logo right after the group was created.
  ///
  /// The photo endpoint rejects uploads until the group has been provisioned.
  pub const LOGO_UPLOAD: RetryPolicy = RetryPolicy {
    max_attempts: 15,
    base_backoff_ms: 500,
  };

  /// Delay before retrying after the given (1-based) failed attempt.
  pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
    Duration::from_millis(self.base_backoff_ms.saturating_mul(attempt as u64))
  }
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self::LOGO_UPLOAD
  }
}

/// Run `op` until it succeeds or `policy.max_attempts` attempts have failed.
///
/// `op` receives the 1-based attempt number. The error of the last attempt is
/// returned when all attempts fail.
pub async fn retry_async<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
  F: FnMut(usize) -> Fut,
  Fut: Future<Output = Result<T, E>>,
  E: Display,
{
  let max_attempts = policy.max_attempts.max(1);
  let mut attempt = 1;

  loop {
    match op(attempt).await {
      Ok(value) => return Ok(value),
      Err(e) if attempt < max_attempts => {
        let delay = policy.delay_for_attempt(attempt);
        debug!(attempt, error = %e, delay_ms = delay.as_millis() as u64, "attempt failed, retrying");
        tokio::time::sleep(delay).await;
        attempt += 1;
      }
      Err(e) => return Err(e),
    }
  }
}
