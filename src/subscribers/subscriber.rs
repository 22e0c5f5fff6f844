//! # Listening to activation lifecycles.
//!
//! A [`Subscribe`] implementation sees the lifecycle of every activation started
//! with [`Task::activate_with`](crate::Task::activate_with) on its
//! [`SubscriberSet`](crate::SubscriberSet):
//!
//! ```text
//! Subscribed ──► Next ──► Completed     value
//! Subscribed ──────────► Completed      empty
//! Subscribed ──────────► Failed         failure (reason = bare message)
//! Subscribed ──────────► Canceled       cancelled before delivery
//! ```
//!
//! Events of one activation arrive in that order. Events of concurrent activations
//! interleave; use [`Event::task`](crate::Event::task) (set with
//! [`Task::named`](crate::Task::named)) and [`Event::seq`](crate::Event::seq) to tell them apart.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use async_trait::async_trait;
//! use monotask::{Event, EventKind, Subscribe};
//!
//! #[derive(Default)]
//! struct FailureCounter(AtomicU64);
//!
//! #[async_trait]
//! impl Subscribe for FailureCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if ev.kind == EventKind::Failed {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "failure-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Receiver of activation lifecycle events.
///
/// Runs on its own worker, fed by a bounded queue: a slow `on_event` delays
/// only this subscriber, and once its queue is full further events are dropped
/// for it alone. The activation that published never waits.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one event. A panic here is logged and the worker moves on.
    async fn on_event(&self, event: &Event);

    /// Name shown in overflow and panic logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Events that may wait for this subscriber before new ones are dropped.
    ///
    /// Values below 1 are treated as 1.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
