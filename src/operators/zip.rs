//! # Pairing two independent tasks.
//!
//! Both sides are activated together and polled concurrently on the activating
//! context; blocking sides only overlap when bound to executors with
//! [`Task::run_on`](crate::Task::run_on).
//!
//! ## Rules
//! - The result resolves only once **both** sides reached a terminal signal.
//! - `Value(a)` + `Value(b)` → `Value((a, b))`.
//! - Any `Failure` → that failure; if both fail, the one that resolved first wins
//!   (left wins when both resolve in the same poll).
//! - Otherwise, any `Empty` → `Empty`.

use std::sync::Arc;

use futures::future::{self, Either};

use crate::error::TaskError;
use crate::operators::call_guarded;
use crate::tasks::{BoxOutcome, Outcome, Task};

/// Pairs the values of two tasks. Same as [`Task::zip`].
///
/// ```rust
/// use monotask::{Outcome, Task, zip};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let both = zip(Task::create("linkedin"), Task::create("github"));
/// assert_eq!(both.run().await, Outcome::Value(("linkedin", "github")));
///
/// let one_empty = zip(Task::create("linkedin"), Task::<&str>::empty());
/// assert_eq!(one_empty.run().await, Outcome::Empty);
/// # }
/// ```
pub fn zip<A, B>(a: Task<A>, b: Task<B>) -> Task<(A, B)>
where
    A: Send + 'static,
    B: Send + 'static,
{
    a.zip(b)
}

impl<T: Send + 'static> Task<T> {
    /// Pairs this task's value with `other`'s.
    pub fn zip<U>(self, other: Task<U>) -> Task<(T, U)>
    where
        U: Send + 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines this task's value with `other`'s using `f`.
    ///
    /// A panic in `f` degrades the activation to `Failure(TaskError::Transform)`.
    pub fn zip_with<U, R, F>(self, other: Task<U>, f: F) -> Task<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.derive(move |upstream| {
            let left = upstream.run();
            let right = other.run();
            let f = Arc::clone(&f);
            Box::pin(async move {
                let (l, r, left_first) = join_ordered(left, right).await;

                let first_failure = if left_first {
                    l.failure().or(r.failure())
                } else {
                    r.failure().or(l.failure())
                };
                if let Some(e) = first_failure {
                    return Outcome::Failure(e.clone());
                }

                match (l, r) {
                    (Outcome::Value(a), Outcome::Value(b)) => match call_guarded(|| f(a, b)) {
                        Ok(v) => Outcome::Value(v),
                        Err(error) => Outcome::Failure(TaskError::Transform { error }),
                    },
                    _ => Outcome::Empty,
                }
            })
        })
    }
}

/// Awaits both outcomes; the flag tells whether the left one resolved first.
async fn join_ordered<A, B>(left: BoxOutcome<A>, right: BoxOutcome<B>) -> (Outcome<A>, Outcome<B>, bool) {
    match future::select(left, right).await {
        Either::Left((l, right)) => (l, right.await, true),
        Either::Right((r, left)) => (left.await, r, false),
    }
}
