//! # Event subscribers for activations.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out,
//! and the built-in [`LogWriter`] (feature `logging`).
//!
//! ## Architecture
//! ```text
//! Activation ── emit(Event) ──► SubscriberSet ──┬──► [queue] ──► LogWriter
//!                                               ├──► [queue] ──► Metrics
//!                                               └──► [queue] ──► Custom ...
//! ```

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod subscriber_set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use subscriber_set::SubscriberSet;
