//! # Task abstractions.
//!
//! This module provides the core task-related types:
//! - [`Task`] - deferred, cold, single-value computation
//! - [`Outcome`] - terminal result of one activation
//! - [`Observer`], [`Callbacks`] - consumer side of an activation
//! - [`Activation`], [`Canceller`] - a running activation and its cancel handle

mod activation;
mod observer;
mod outcome;
mod task;

pub use activation::{Activation, Canceller};
pub use observer::{Callbacks, Observer};
pub use outcome::Outcome;
pub use task::{BoxOutcome, Task};
pub(crate) use task::guarded;
