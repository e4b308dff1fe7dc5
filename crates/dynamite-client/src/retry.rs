//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

use crate::error::DynamoDbError;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 10;
/// Default base delay.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(25);
/// Default ceiling for the exponential part of the delay.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(20);

/// Decides whether a failed attempt is retried, and after how long.
///
/// The delay before retry `n` (0-based) is `min(base * 2^n, max_backoff)`
/// plus a uniformly random jitter in `[0, base]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. `0` disables retrying.
    pub max_retries: u32,
    /// Delay unit for the exponential backoff and the jitter bound.
    pub base_delay: Duration,
    /// Cap on the exponential part of the delay.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// A policy with explicit limits.
    #[must_use]
    pub fn new(max_retries: u32, base_delay: Duration, max_backoff: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_backoff,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Whether `error` should be retried given `retries_so_far`.
    #[must_use]
    pub fn should_retry(&self, error: &DynamoDbError, retries_so_far: u32) -> bool {
        retries_so_far < self.max_retries && error.is_retryable()
    }

    /// The capped exponential delay before retry `retry`, without jitter.
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.base_delay
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// [`backoff`](Self::backoff) plus random jitter up to `base_delay`.
    #[must_use]
    pub fn delay(&self, retry: u32) -> Duration {
        let bound = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let jitter = rand::rng().random_range(0..=bound);
        self.backoff(retry)
            .saturating_add(Duration::from_millis(jitter))
    }
}
