//! # Deadline for one activation.

use std::time::Duration;

use tokio::time;

use crate::error::TaskError;
use crate::tasks::{Outcome, Task};

impl<T: Send + 'static> Task<T> {
    /// Fails with [`TaskError::Timeout`] if the upstream does not reach a terminal
    /// signal within `timeout`. `Duration::ZERO` disables the deadline.
    ///
    /// The upstream future is dropped on expiry; a blocking producer that already
    /// holds its thread is not interrupted.
    pub fn timeout(self, timeout: Duration) -> Task<T> {
        if timeout == Duration::ZERO {
            return self;
        }
        self.derive(move |upstream| {
            let upstream = upstream.run();
            Box::pin(async move {
                match time::timeout(timeout, upstream).await {
                    Ok(out) => out,
                    Err(_elapsed) => Outcome::Failure(TaskError::Timeout { timeout }),
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleepy(ms: u64) -> Task<u8> {
        Task::from_producer(move || async move {
            time::sleep(Duration::from_millis(ms)).await;
            Outcome::Value(1)
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires() {
        let t = sleepy(500).timeout(Duration::from_millis(100));
        assert_eq!(
            t.run().await,
            Outcome::Failure(TaskError::Timeout {
                timeout: Duration::from_millis(100)
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_within_deadline() {
        let t = sleepy(50).timeout(Duration::from_millis(100));
        assert_eq!(t.run().await, Outcome::Value(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_disables() {
        let t = sleepy(5_000).timeout(Duration::ZERO);
        assert_eq!(t.run().await, Outcome::Value(1));
    }
}
