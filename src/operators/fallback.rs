//! # Empty handling: `switch_if_empty`, `default_if_empty`.

use std::sync::Arc;

use futures::future::{self, FutureExt};

use crate::error::TaskError;
use crate::operators::call_guarded;
use crate::tasks::{Outcome, Task};

impl<T: Send + 'static> Task<T> {
    /// On `Empty`, builds a fallback task with `fallback` and forwards its terminal signal.
    ///
    /// The fallback is constructed lazily, only when `Empty` is actually observed,
    /// and again on every activation that observes it. `Value` and `Failure` pass through.
    ///
    /// ```rust
    /// use monotask::{Outcome, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let profile = Task::<&str>::empty().switch_if_empty(|| Task::create("https://github.com"));
    /// assert_eq!(profile.run().await, Outcome::Value("https://github.com"));
    /// # }
    /// ```
    pub fn switch_if_empty<F>(self, fallback: F) -> Task<T>
    where
        F: Fn() -> Task<T> + Send + Sync + 'static,
    {
        let fallback = Arc::new(fallback);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let fallback = Arc::clone(&fallback);
            Box::pin(async move {
                match upstream.await {
                    Outcome::Empty => match call_guarded(|| fallback()) {
                        Ok(alt) => alt.run().await,
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    other => other,
                }
            })
        })
    }

    /// On `Empty`, yields `value` instead.
    pub fn default_if_empty(self, value: T) -> Task<T>
    where
        T: Clone + Sync,
    {
        self.derive(move |upstream| {
            let value = value.clone();
            upstream
                .run()
                .then(move |out| match out {
                    Outcome::Empty => future::ready(Outcome::Value(value)),
                    other => future::ready(other),
                })
                .boxed()
        })
    }
}
