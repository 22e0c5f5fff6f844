//! # Deferred single-value task.
//!
//! [`Task`] wraps a producer function that builds a fresh future on every activation.
//! Building a task (or composing combinators on it) performs no work; the producer
//! runs only when the task is activated via [`Task::activate`] or evaluated via [`Task::run`].
//!
//! ## Rules
//! - Tasks are **cold**: every activation re-runs the producer from scratch, nothing is cached.
//! - Tasks are **immutable**: combinators return new tasks, the original can be reused.
//! - Cloning a task is cheap (`Arc` of the producer).
//! - Panics inside producers are caught and delivered as [`TaskError::Panicked`].
//!
//! ## Example
//! ```rust
//! use monotask::{Outcome, Task};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let hello = Task::create("Hello".to_string()).map(|s| s.to_uppercase());
//! assert_eq!(hello.run().await, Outcome::Value("HELLO".to_string()));
//! // Cold: a second evaluation runs the pipeline again.
//! assert_eq!(hello.run().await, Outcome::Value("HELLO".to_string()));
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::error::{TaskError, panic_message};
use crate::subscribers::SubscriberSet;
use crate::tasks::activation::Activation;
use crate::tasks::observer::Observer;
use crate::tasks::outcome::Outcome;

/// Boxed future of one activation.
pub type BoxOutcome<T> = BoxFuture<'static, Outcome<T>>;

type Producer<T> = dyn Fn() -> BoxOutcome<T> + Send + Sync;

/// Deferred computation of a single value, an empty completion, or a failure.
pub struct Task<T> {
    producer: Arc<Producer<T>>,
    label: Option<Arc<str>>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Task<T> {
    /// Creates a task from a raw producer returning boxed futures.
    ///
    /// Every combinator is built on top of this constructor.
    pub fn from_boxed<F>(producer: F) -> Self
    where
        F: Fn() -> BoxOutcome<T> + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
            label: None,
        }
    }

    /// Task that yields `value` on every activation.
    pub fn create(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_boxed(move || future::ready(Outcome::Value(value.clone())).boxed())
    }

    /// Task that completes without a value.
    pub fn empty() -> Self {
        Self::from_boxed(|| future::ready(Outcome::Empty).boxed())
    }

    /// Task that fails with `error` on every activation.
    pub fn fail(error: impl Into<TaskError>) -> Self {
        let error = error.into();
        Self::from_boxed(move || future::ready(Outcome::Failure(error.clone())).boxed())
    }

    /// Task whose outcome is computed by an async producer.
    ///
    /// The producer is called once per activation; the returned future is polled
    /// on the activating context (or on the executor set with [`Task::run_on`]).
    ///
    /// ```rust
    /// use monotask::{Outcome, Task};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let t = Task::from_producer(|| async { Outcome::Value(21 * 2) });
    /// assert_eq!(t.run().await, Outcome::Value(42));
    /// # }
    /// ```
    pub fn from_producer<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome<T>> + Send + 'static,
    {
        let producer = Arc::new(producer);
        Self::from_boxed(move || {
            let producer = Arc::clone(&producer);
            guarded(async move { producer().await })
        })
    }

    /// Task wrapping a blocking, non-async computation.
    ///
    /// The callable runs when the task is polled and blocks that context until it
    /// returns. Bind it to a [`WorkerPool`](crate::WorkerPool) with [`Task::run_on`]
    /// to keep it off the caller.
    pub fn from_callable<F, E>(callable: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: Into<TaskError>,
    {
        let callable = Arc::new(callable);
        Self::from_boxed(move || {
            let callable = Arc::clone(&callable);
            Box::pin(async move {
                match catch_unwind(AssertUnwindSafe(|| callable())) {
                    Ok(res) => Outcome::from(res),
                    Err(payload) => Outcome::Failure(TaskError::Panicked {
                        info: panic_message(payload),
                    }),
                }
            })
        })
    }

    /// Task that builds its inner task on each activation.
    ///
    /// The supplier is never called at composition time.
    pub fn defer<F>(supplier: F) -> Self
    where
        F: Fn() -> Task<T> + Send + Sync + 'static,
    {
        let supplier = Arc::new(supplier);
        Self::from_boxed(move || {
            let supplier = Arc::clone(&supplier);
            Box::pin(async move {
                match catch_unwind(AssertUnwindSafe(|| supplier())) {
                    Ok(inner) => inner.run().await,
                    Err(payload) => Outcome::Failure(TaskError::Panicked {
                        info: panic_message(payload),
                    }),
                }
            })
        })
    }

    /// Attaches a label that instrumentation events carry as `task`.
    pub fn named(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label set with [`Task::named`], if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Evaluates one activation and returns its outcome without an observer.
    pub fn run(&self) -> BoxOutcome<T> {
        (self.producer)()
    }

    /// Activates the task, delivering the terminal signal to `observer`.
    ///
    /// The returned [`Activation`] is driven by whoever awaits it.
    pub fn activate<O>(&self, observer: O) -> Activation
    where
        O: Observer<T>,
    {
        Activation::new(self, observer, None)
    }

    /// Same as [`Task::activate`], additionally publishing lifecycle events to `subscribers`.
    pub fn activate_with<O>(&self, observer: O, subscribers: Arc<SubscriberSet>) -> Activation
    where
        O: Observer<T>,
    {
        Activation::new(self, observer, Some(subscribers))
    }

    /// Builds a downstream task: `step` receives this task on every activation.
    ///
    /// The label is carried over.
    pub(crate) fn derive<U, F>(self, step: F) -> Task<U>
    where
        U: Send + 'static,
        F: Fn(&Task<T>) -> BoxOutcome<U> + Send + Sync + 'static,
    {
        let label = self.label.clone();
        let upstream = self;
        Task {
            producer: Arc::new(move || step(&upstream)),
            label,
        }
    }
}

/// Converts a panic escaping `fut` into [`TaskError::Panicked`].
pub(crate) fn guarded<T, Fut>(fut: Fut) -> BoxOutcome<T>
where
    T: Send + 'static,
    Fut: Future<Output = Outcome<T>> + Send + 'static,
{
    Box::pin(AssertUnwindSafe(fut).catch_unwind().map(|res| match res {
        Ok(out) => out,
        Err(payload) => Outcome::Failure(TaskError::Panicked {
            info: panic_message(payload),
        }),
    }))
}
