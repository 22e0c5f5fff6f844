//! # Retry policy for [`Task::retry`](crate::Task::retry).
//!
//! Decides how many times a failed upstream is re-activated and how long to wait
//! between attempts. Only failures with [`TaskError::is_retryable`] are retried.

use crate::error::TaskError;
use crate::policies::backoff::BackoffPolicy;

/// How often and how fast to re-activate a failing upstream.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Re-activations after the first attempt (`0` disables retrying).
    pub max_retries: u32,
    /// Delay computation between attempts.
    pub backoff: BackoffPolicy,
}

impl Default for RetryPolicy {
    /// Three retries with [`BackoffPolicy::default`].
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: BackoffPolicy::default(),
        }
    }
}

impl RetryPolicy {
    /// Policy with `max_retries` and the default backoff.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Replaces the backoff policy.
    #[must_use]
    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns `true` if a failure after `retries_done` retries should be retried.
    pub fn should_retry(&self, error: &TaskError, retries_done: u32) -> bool {
        retries_done < self.max_retries && error.is_retryable()
    }
}
