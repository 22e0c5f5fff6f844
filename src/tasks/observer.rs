//! # Consumer side of an activation.
//!
//! An [`Observer`] receives the terminal signal of exactly one activation:
//!
//! ```text
//! Value(v)   ──► on_value(v) ──► on_complete()
//! Empty      ──────────────────► on_complete()
//! Failure(e) ──► on_failure(e) ──► Ok(())   handled
//!                               └─► Err(e)  handed back to whoever awaits the activation
//! ```
//!
//! [`Callbacks`] builds an observer from closures; unset callbacks are no-ops, except
//! a missing failure callback, which hands the error back so it is never dropped.

use crate::error::TaskError;

/// Receiver of one activation's terminal signal.
///
/// Each method is invoked at most once per activation, and `on_failure` is never
/// combined with `on_value`/`on_complete`.
pub trait Observer<T>: Send + 'static {
    /// Called with the produced value, right before [`Observer::on_complete`].
    fn on_value(&mut self, value: T);

    /// Called when the activation fails.
    ///
    /// Return `Err` to surface the failure to the caller awaiting the activation.
    /// The default hands every failure back.
    fn on_failure(&mut self, error: TaskError) -> Result<(), TaskError> {
        Err(error)
    }

    /// Called after a value, or alone for an empty completion.
    fn on_complete(&mut self) {}
}

type ValueFn<T> = Box<dyn FnMut(T) + Send>;
type FailureFn = Box<dyn FnMut(TaskError) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;

/// Closure-backed [`Observer`].
///
/// ## Example
/// ```rust
/// use monotask::{Callbacks, Task};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let res = Task::create(5)
///     .activate(Callbacks::new().with_value(|v| assert_eq!(v, 5)))
///     .await;
/// assert!(res.is_ok());
///
/// // No failure callback: the error comes back from the activation.
/// let res = Task::<i32>::fail("down").activate(Callbacks::new()).await;
/// assert!(res.is_err());
/// # }
/// ```
pub struct Callbacks<T> {
    on_value: Option<ValueFn<T>>,
    on_failure: Option<FailureFn>,
    on_complete: Option<CompleteFn>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            on_value: None,
            on_failure: None,
            on_complete: None,
        }
    }
}

impl<T> Callbacks<T> {
    /// Creates an observer with no callbacks set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value callback.
    pub fn with_value(mut self, f: impl FnMut(T) + Send + 'static) -> Self {
        self.on_value = Some(Box::new(f));
        self
    }

    /// Sets the failure callback; failures are then considered handled.
    pub fn with_failure(mut self, f: impl FnMut(TaskError) + Send + 'static) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    pub fn with_complete(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl<T: 'static> Observer<T> for Callbacks<T> {
    fn on_value(&mut self, value: T) {
        if let Some(f) = self.on_value.as_mut() {
            f(value);
        }
    }

    fn on_failure(&mut self, error: TaskError) -> Result<(), TaskError> {
        match self.on_failure.as_mut() {
            Some(f) => {
                f(error);
                Ok(())
            }
            None => Err(error),
        }
    }

    fn on_complete(&mut self) {
        if let Some(f) = self.on_complete.as_mut() {
            f();
        }
    }
}
