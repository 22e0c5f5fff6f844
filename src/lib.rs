//! # monotask
//!
//! **Monotask** is a small library of lazy, single-value asynchronous tasks for Rust.
//!
//! A [`Task`] describes a computation that yields exactly one terminal signal:
//! a value, an empty completion, or a failure. Nothing runs until the task is
//! activated; combinators build new tasks out of existing ones, and a task can be
//! bound to a caller-owned [`WorkerPool`] to keep blocking work off the caller.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐      ┌──────────────┐
//!     │ Task<A>      │      │ Task<B>      │     (cold: producer only)
//!     └──────┬───────┘      └──────┬───────┘
//!            │ map / flat_map / ...│ run_on(pool)
//!            ▼                     ▼
//! ┌──────────────────────────────────────────────┐
//! │  Combinators (operators)                     │
//! │  - transform: map, try_map, flat_map         │
//! │  - zip / zip_with                            │
//! │  - switch_if_empty, on_error_resume, ...     │
//! │  - timeout, retry (RetryPolicy)              │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//!                  Task<(A, B)>
//!                        │ activate(observer) / activate_with(observer, subscribers)
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  Activation (caller-driven future)           │
//! │  - races the pipeline against its Canceller  │
//! │  - delivers one terminal signal to Observer  │
//! └──────┬───────────────────────────────┬───────┘
//!        ▼                               ▼
//!   Observer                      SubscriberSet (optional)
//!   on_value / on_failure /       (per-subscriber queues)
//!   on_complete                   ┌──────┼──────┐
//!                                 ▼      ▼      ▼
//!                           LogWriter  sub2   subN
//! ```
//!
//! ### Lifecycle of one activation
//! ```text
//! activate(observer) ──► Activation.await
//!   ├─► publish Subscribed
//!   ├─► run pipeline (select against cancellation)
//!   │     ├─ cancelled    ──► publish Canceled, no signal delivered
//!   │     ├─ Value(v)     ──► publish Next, on_value(v), publish Completed, on_complete()
//!   │     ├─ Empty        ──► publish Completed, on_complete()
//!   │     └─ Failure(e)   ──► publish Failed, on_failure(e)
//!   └─► resolves Ok(()) or the failure the observer did not handle
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                            |
//! |-------------------|---------------------------------------------------------------|-----------------------------------------------|
//! | **Tasks**         | Build lazy tasks and compose them.                            | [`Task`], [`Outcome`], [`zip`]                |
//! | **Consumers**     | Receive the terminal signal, cancel activations.              | [`Observer`], [`Callbacks`], [`Activation`]   |
//! | **Executors**     | Run tasks on caller-owned worker pools.                       | [`Executor`], [`WorkerPool`], [`PoolConfig`]  |
//! | **Policies**      | Configure retry and backoff.                                  | [`RetryPolicy`], [`BackoffPolicy`]            |
//! | **Subscriber API**| Hook into activation lifecycle events.                        | [`Subscribe`], [`SubscriberSet`], [`Event`]   |
//! | **Errors**        | Typed errors for failures and setup.                          | [`TaskError`], [`RuntimeError`]               |
//!
//! ## Optional features
//! - `logging` (default): exports the built-in [`LogWriter`] subscriber.
//!
//! ## Example
//! ```rust
//! use monotask::{Callbacks, Outcome, Task};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), monotask::TaskError> {
//!     let linkedin = Task::create("https://www.linkedin.com/in/janvi-parikh".to_string());
//!     let github = Task::<String>::empty().switch_if_empty(|| Task::create("https://github.com".to_string()));
//!
//!     let saved = linkedin
//!         .zip_with(github, |a, b| format!("{a} & {b}"))
//!         .flat_map(|urls| Task::create(format!("{urls} saved")));
//!
//!     saved
//!         .activate(Callbacks::new().with_value(|v: String| println!("{v}")))
//!         .await?;
//!
//!     assert_eq!(
//!         saved.run().await,
//!         Outcome::Value("https://www.linkedin.com/in/janvi-parikh & https://github.com saved".to_string())
//!     );
//!     Ok(())
//! }
//! ```
mod error;
mod events;
mod executors;
mod operators;
mod policies;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use error::{RuntimeError, TaskError};
pub use events::{Event, EventKind};
pub use executors::{Executor, ExecutorRef, PoolConfig, WorkerPool};
pub use operators::zip;
pub use policies::{BackoffPolicy, JitterPolicy, RetryPolicy};
pub use subscribers::{Subscribe, SubscriberSet};
pub use tasks::{Activation, BoxOutcome, Callbacks, Canceller, Observer, Outcome, Task};

// Optional: built-in subscriber writing events through `tracing`.
// Enabled by default; disable with `--no-default-features`.
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
