//! # Failure handling: `on_error_resume`, `on_error_return`, `do_on_error`.
//!
//! ```text
//! on_error_resume: Failure(e) ──► run handler(e) ──► its terminal signal
//! on_error_return: Failure(e) ──► Value(fallback)
//! do_on_error:     Failure(e) ──► side_effect(&e) ──► Failure(e)   (never intercepts)
//! ```

use std::sync::Arc;

use futures::future::{self, FutureExt};

use crate::error::TaskError;
use crate::operators::call_guarded;
use crate::tasks::{Outcome, Task};

impl<T: Send + 'static> Task<T> {
    /// On `Failure(e)`, replaces the result with the task returned by `handler(e)`.
    ///
    /// `Value` and `Empty` pass through without calling `handler`.
    ///
    /// ```rust
    /// use monotask::{Outcome, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let profile = Task::<&str>::fail("Github Not Reachable")
    ///     .on_error_resume(|_err| Task::create("https://github.com"));
    /// assert_eq!(profile.run().await, Outcome::Value("https://github.com"));
    /// # }
    /// ```
    pub fn on_error_resume<F>(self, handler: F) -> Task<T>
    where
        F: Fn(TaskError) -> Task<T> + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let handler = Arc::clone(&handler);
            Box::pin(async move {
                match upstream.await {
                    Outcome::Failure(e) => match call_guarded(|| handler(e)) {
                        Ok(replacement) => replacement.run().await,
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    other => other,
                }
            })
        })
    }

    /// On `Failure`, yields `value` instead.
    pub fn on_error_return(self, value: T) -> Task<T>
    where
        T: Clone + Sync,
    {
        self.derive(move |upstream| {
            let value = value.clone();
            upstream
                .run()
                .then(move |out| match out {
                    Outcome::Failure(_) => future::ready(Outcome::Value(value)),
                    other => future::ready(other),
                })
                .boxed()
        })
    }

    /// Runs `side_effect` on a failure, then re-delivers the same failure.
    ///
    /// Intended for logging or metrics. A panicking side effect is logged and ignored;
    /// the original failure is delivered either way.
    pub fn do_on_error<F>(self, side_effect: F) -> Task<T>
    where
        F: Fn(&TaskError) + Send + Sync + 'static,
    {
        let side_effect = Arc::new(side_effect);
        self.derive(move |upstream| {
            let side_effect = Arc::clone(&side_effect);
            upstream
                .run()
                .inspect(move |out| {
                    if let Outcome::Failure(e) = out {
                        if let Err(info) = call_guarded(|| side_effect(e)) {
                            tracing::warn!(%info, error = %e, "do_on_error side effect panicked");
                        }
                    }
                })
                .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_resume_replaces_failure() {
        let t = Task::<String>::fail("Github Not Reachable")
            .on_error_resume(|_| Task::create("https://github.com".to_string()));
        assert_eq!(t.run().await, Outcome::Value("https://github.com".to_string()));
    }

    #[tokio::test]
    async fn test_resume_handler_sees_error() {
        let t = Task::<String>::fail("timeout talking to github")
            .on_error_resume(|e| Task::create(format!("recovered from {}", e.as_message())));
        assert_eq!(
            t.run().await,
            Outcome::Value("recovered from timeout talking to github".to_string())
        );
    }

    #[tokio::test]
    async fn test_resume_not_called_on_value_or_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let on_value = Task::create(1u8).on_error_resume(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Task::create(0)
        });
        assert_eq!(on_value.run().await, Outcome::Value(1));

        let c = calls.clone();
        let on_empty = Task::<u8>::empty().on_error_resume(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Task::create(0)
        });
        assert_eq!(on_empty.run().await, Outcome::Empty);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resume_into_failure() {
        let t = Task::<u8>::fail("first").on_error_resume(|_| Task::fail("second"));
        assert_eq!(t.run().await, Outcome::Failure(TaskError::fail("second")));
    }

    #[tokio::test]
    async fn test_on_error_return() {
        assert_eq!(
            Task::<u8>::fail("x").on_error_return(0).run().await,
            Outcome::Value(0)
        );
        assert_eq!(
            Task::<u8>::empty().on_error_return(0).run().await,
            Outcome::Empty
        );
    }

    #[tokio::test]
    async fn test_do_on_error_forwards_original() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let t = Task::<String>::fail("Github Not Reachable")
            .do_on_error(move |e| s.lock().unwrap().push(e.as_message()));

        assert_eq!(
            t.run().await,
            Outcome::Failure(TaskError::fail("Github Not Reachable"))
        );
        assert_eq!(*seen.lock().unwrap(), vec!["Github Not Reachable".to_string()]);
    }

    #[tokio::test]
    async fn test_do_on_error_panic_keeps_failure() {
        let t = Task::<u8>::fail("boom").do_on_error(|_| panic!("logger broken"));
        assert_eq!(t.run().await, Outcome::Failure(TaskError::fail("boom")));
    }

    #[tokio::test]
    async fn test_do_on_error_skips_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let t = Task::create(1u8).do_on_error(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(t.run().await, Outcome::Value(1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
