//! Write pacing and bounded rate-limit retry.
//!
//! The ledger API enforces a small hourly request budget, so consecutive
//! writes are spaced by a minimum gap and rate-limit responses are retried
//! a fixed number of times with a fixed backoff. Anything still failing
//! after that propagates to the caller.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::client::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

/// Run `op`, retrying only on the rate-limit signal. Other errors return
/// immediately; exhausting the attempts returns the final rate-limit error.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, op: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Err(ApiError::RateLimited) if attempt < policy.max_attempts => {
                attempt += 1;
                tokio::time::sleep(policy.backoff).await;
            }
            result => return result,
        }
    }
}

/// Dispatches write operations with a minimum gap between consecutive
/// calls, retrying each one under the given policy.
pub struct WritePacer {
    gap: Duration,
    policy: RetryPolicy,
    last_dispatch: Option<Instant>,
}

impl WritePacer {
    pub fn new(gap: Duration, policy: RetryPolicy) -> Self {
        Self {
            gap,
            policy,
            last_dispatch: None,
        }
    }

    pub async fn dispatch<T, F, Fut>(&mut self, op: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(last) = self.last_dispatch {
            let elapsed = last.elapsed();
            if elapsed < self.gap {
                tokio::time::sleep(self.gap - elapsed).await;
            }
        }
        let result = with_retry(self.policy, op).await;
        self.last_dispatch = Some(Instant::now());
        result
    }
}
