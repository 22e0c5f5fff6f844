//! # Re-activating a failing upstream.
//!
//! ```text
//! loop {
//!   ├─► run upstream (fresh activation, cold)
//!   ├─► Value / Empty              ─► deliver
//!   ├─► Failure, not retryable     ─► deliver
//!   ├─► Failure, budget exhausted  ─► deliver last failure
//!   └─► Failure, retryable         ─► sleep(backoff.delay(n)), n += 1
//! }
//! ```

use tokio::time;

use crate::policies::RetryPolicy;
use crate::tasks::{Outcome, Task};

impl<T: Send + 'static> Task<T> {
    /// Re-activates this task on retryable failures according to `policy`.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    /// use monotask::{BackoffPolicy, Outcome, RetryPolicy, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let calls = Arc::new(AtomicU32::new(0));
    /// let c = calls.clone();
    /// let flaky = Task::from_producer(move || {
    ///     let n = c.fetch_add(1, Ordering::SeqCst);
    ///     async move {
    ///         if n < 2 { Outcome::Failure("Github Not Reachable".into()) } else { Outcome::Value(n) }
    ///     }
    /// });
    ///
    /// let policy = RetryPolicy::new(3).with_backoff(BackoffPolicy::constant(Default::default()));
    /// assert_eq!(flaky.retry(policy).run().await, Outcome::Value(2));
    /// # }
    /// ```
    pub fn retry(self, policy: RetryPolicy) -> Task<T> {
        self.derive(move |upstream| {
            let upstream = upstream.clone();
            Box::pin(async move {
                let mut retries = 0u32;
                loop {
                    match upstream.run().await {
                        Outcome::Failure(e) if policy.should_retry(&e, retries) => {
                            let delay = policy.backoff.delay(retries);
                            retries += 1;
                            tracing::debug!(
                                task = upstream.label().unwrap_or("-"),
                                retry = retries,
                                ?delay,
                                error = %e,
                                "retry scheduled"
                            );
                            time::sleep(delay).await;
                        }
                        out => return out,
                    }
                }
            })
        })
    }
}
