//! # LogWriter: event logger
//!
//! A minimal subscriber that writes incoming [`Event`]s through `tracing`,
//! one line per lifecycle signal (the counterpart of a `.log()` operator).
//!
//! ## Example output
//! ```text
//! INFO monotask::events: [subscribed] task="linkedin" thread="main"
//! INFO monotask::events: [next] task="linkedin" thread="main"
//! INFO monotask::events: [completed] task="linkedin" thread="main"
//! WARN monotask::events: [failed] task="github" thread="main" reason="Github Not Reachable"
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let task = e.task.as_deref().unwrap_or("-");
        let thread = e.thread.as_deref().unwrap_or("-");
        match e.kind {
            EventKind::Failed => {
                tracing::warn!(
                    target: "monotask::events",
                    seq = e.seq,
                    "[failed] task={task:?} thread={thread:?} reason={:?}",
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
            kind => {
                tracing::info!(
                    target: "monotask::events",
                    seq = e.seq,
                    "[{}] task={task:?} thread={thread:?}",
                    kind.as_label(),
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
