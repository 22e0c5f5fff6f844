//! Retry policies.
//!
//! ## Contents
//! - [`RetryPolicy`] how many times a failing upstream is re-activated
//! - [`BackoffPolicy`] how delays between attempts evolve (first / factor / max + jitter)
//! - [`JitterPolicy`] randomization strategy to avoid synchronized retries
//!
//! ## Quick wiring
//! ```text
//! task.retry(RetryPolicy { max_retries, backoff })
//!      └─► on retryable Failure: sleep(backoff.delay(n)), re-activate upstream
//! ```

mod backoff;
mod jitter;
mod retry;

pub use backoff::BackoffPolicy;
pub use jitter::JitterPolicy;
pub use retry::RetryPolicy;
