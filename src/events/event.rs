//! # Lifecycle events emitted by activations.
//!
//! The [`EventKind`] enum classifies the signals an activation goes through,
//! the [`Event`] struct carries the metadata: timestamp, task label, thread name, reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use monotask::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::Failed)
//!     .with_task("github-profile")
//!     .with_reason("Github Not Reachable");
//!
//! assert_eq!(ev.kind, EventKind::Failed);
//! assert_eq!(ev.task.as_deref(), Some("github-profile"));
//! assert_eq!(ev.reason.as_deref(), Some("Github Not Reachable"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of activation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Activation started; the pipeline is about to run.
    ///
    /// Sets:
    /// - `task`: task label (if named)
    /// - `thread`: name of the thread driving the activation
    Subscribed,

    /// The pipeline produced a value (always followed by `Completed`).
    ///
    /// Sets:
    /// - `task`: task label (if named)
    /// - `thread`: delivering thread
    Next,

    /// The activation completed, with or without a value.
    ///
    /// Sets:
    /// - `task`: task label (if named)
    /// - `thread`: delivering thread
    Completed,

    /// The pipeline failed.
    ///
    /// Sets:
    /// - `task`: task label (if named)
    /// - `thread`: delivering thread
    /// - `reason`: failure message
    Failed,

    /// The activation was cancelled before delivering its terminal signal.
    ///
    /// Sets:
    /// - `task`: task label (if named)
    Canceled,
}

impl EventKind {
    /// Short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::Subscribed => "subscribed",
            EventKind::Next => "next",
            EventKind::Completed => "completed",
            EventKind::Failed => "failed",
            EventKind::Canceled => "canceled",
        }
    }

    /// Returns `true` for the signals that end an activation.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EventKind::Completed | EventKind::Failed | EventKind::Canceled
        )
    }
}

/// Activation event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Label of the task, if it was named.
    pub task: Option<Arc<str>>,
    /// Name of the thread the event was emitted from.
    pub thread: Option<Arc<str>>,
    /// Human-readable reason (failure message).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            task: None,
            thread: None,
            reason: None,
        }
    }

    /// Attaches a task label.
    #[inline]
    pub fn with_task(mut self, task: impl Into<Arc<str>>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a thread name.
    #[inline]
    pub fn with_thread(mut self, thread: impl Into<Arc<str>>) -> Self {
        self.thread = Some(thread.into());
        self
    }

    /// Attaches the name of the calling thread (unnamed threads are skipped).
    #[inline]
    pub fn with_current_thread(self) -> Self {
        match std::thread::current().name() {
            Some(name) => self.with_thread(name),
            None => self,
        }
    }
}
