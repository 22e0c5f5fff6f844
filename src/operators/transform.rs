//! # Value transformations: `map`, `try_map`, `flat_map`, `do_on_next`.
//!
//! All four only act on `Value`; `Empty` and `Failure` pass through untouched and the
//! supplied function is never invoked for them.
//!
//! ```text
//! map:      Value(v) ──► Value(f(v))          f panics ──► Failure(Transform)
//! try_map:  Value(v) ──► Value(u) | Failure(e)
//! flat_map: Value(v) ──► run f(v) ──► its terminal signal
//! ```

use std::sync::Arc;

use crate::error::TaskError;
use crate::operators::call_guarded;
use crate::tasks::{Outcome, Task};

impl<T: Send + 'static> Task<T> {
    /// Transforms the value with a synchronous function.
    ///
    /// A panic in `f` degrades the activation to `Failure(TaskError::Transform)`.
    ///
    /// ```rust
    /// use monotask::{Outcome, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let upper = Task::create("Hello").map(|s| s.to_uppercase());
    /// assert_eq!(upper.run().await, Outcome::Value("HELLO".to_string()));
    /// # }
    /// ```
    pub fn map<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let f = Arc::clone(&f);
            Box::pin(async move {
                match upstream.await {
                    Outcome::Value(v) => match call_guarded(|| f(v)) {
                        Ok(u) => Outcome::Value(u),
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    Outcome::Empty => Outcome::Empty,
                    Outcome::Failure(e) => Outcome::Failure(e),
                }
            })
        })
    }

    /// Transforms the value with a fallible function; `Err` becomes the failure.
    pub fn try_map<U, E, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        E: Into<TaskError>,
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let f = Arc::clone(&f);
            Box::pin(async move {
                match upstream.await {
                    Outcome::Value(v) => match call_guarded(|| f(v)) {
                        Ok(res) => Outcome::from(res),
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    Outcome::Empty => Outcome::Empty,
                    Outcome::Failure(e) => Outcome::Failure(e),
                }
            })
        })
    }

    /// Chains a dependent task: the task returned by `f` starts only after this
    /// task's value is known, and its terminal signal becomes the result.
    ///
    /// `f` is never called on `Empty` or `Failure`.
    pub fn flat_map<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let f = Arc::clone(&f);
            Box::pin(async move {
                match upstream.await {
                    Outcome::Value(v) => match call_guarded(|| f(v)) {
                        Ok(inner) => inner.run().await,
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    Outcome::Empty => Outcome::Empty,
                    Outcome::Failure(e) => Outcome::Failure(e),
                }
            })
        })
    }

    /// Runs a side effect on the value, then forwards it unchanged.
    ///
    /// A panicking side effect is logged and ignored.
    pub fn do_on_next<F>(self, f: F) -> Task<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.derive(move |upstream| {
            let upstream = upstream.run();
            let f = Arc::clone(&f);
            Box::pin(async move {
                let out = upstream.await;
                if let Outcome::Value(v) = &out {
                    if let Err(info) = call_guarded(|| f(v)) {
                        tracing::warn!(%info, "do_on_next side effect panicked");
                    }
                }
                out
            })
        })
    }
}
