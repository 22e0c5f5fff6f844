//! Error types used by monotask pipelines and executors.
//!
//! This module defines two error enums:
//!
//! - [`TaskError`]: the failure carried by [`Outcome::Failure`](crate::Outcome::Failure).
//! - [`RuntimeError`]: errors raised while setting up the runtime pieces (executors).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics
//! and [`TaskError::is_retryable`] drives [`Task::retry`](crate::Task::retry).

use std::any::Any;
use std::time::Duration;
use thiserror::Error;

/// # Errors produced while setting up runtime pieces.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A component that needs a tokio runtime was built outside of one.
    #[error("no tokio runtime available for executor {executor:?}")]
    NoRuntime {
        /// Name of the executor being built.
        executor: String,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use monotask::RuntimeError;
    ///
    /// let err = RuntimeError::NoRuntime { executor: "io".into() };
    /// assert_eq!(err.as_label(), "runtime_missing");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::NoRuntime { .. } => "runtime_missing",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::NoRuntime { executor } => {
                format!("executor {executor} needs a tokio runtime")
            }
        }
    }
}

/// # Failure carried through a pipeline.
///
/// Producer failures, mapping failures and failures of inner tasks are all
/// propagated the same way; the variant only records where the failure came from.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// A producer reported a failure.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// A mapping function (`map`, `flat_map`, ...) panicked.
    #[error("transform failed: {error}")]
    Transform {
        /// Panic message of the mapping function.
        error: String,
    },

    /// A producer panicked while computing its outcome.
    #[error("producer panicked: {info}")]
    Panicked {
        /// Panic message.
        info: String,
    },

    /// The upstream did not reach a terminal signal in time.
    #[error("timed out after {timeout:?}")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout: Duration,
    },

    /// The executor refused the job (it was shut down).
    #[error("executor {executor:?} rejected the job")]
    Rejected {
        /// Executor name.
        executor: String,
    },

    /// The executor accepted the job but dropped it before an outcome was produced.
    #[error("executor {executor:?} dropped the job")]
    Dropped {
        /// Executor name.
        executor: String,
    },
}

impl TaskError {
    /// Shorthand for [`TaskError::Fail`].
    ///
    /// ```
    /// use monotask::TaskError;
    ///
    /// let err = TaskError::fail("Github Not Reachable");
    /// assert_eq!(err.as_message(), "Github Not Reachable");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use monotask::TaskError;
    /// use std::time::Duration;
    ///
    /// let err = TaskError::Timeout { timeout: Duration::from_secs(1) };
    /// assert_eq!(err.as_label(), "task_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Transform { .. } => "task_transform_failed",
            TaskError::Panicked { .. } => "task_panicked",
            TaskError::Timeout { .. } => "task_timeout",
            TaskError::Rejected { .. } => "task_rejected",
            TaskError::Dropped { .. } => "task_dropped",
        }
    }

    /// Returns the carried message without the variant prefix.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } | TaskError::Transform { error } => error.clone(),
            TaskError::Panicked { info } => info.clone(),
            TaskError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            TaskError::Rejected { executor } => format!("rejected by {executor}"),
            TaskError::Dropped { executor } => format!("dropped by {executor}"),
        }
    }

    /// Indicates whether re-running the upstream may succeed.
    ///
    /// Returns `true` for [`TaskError::Fail`] and [`TaskError::Timeout`],
    /// `false` otherwise.
    ///
    /// # Example
    /// ```
    /// use monotask::TaskError;
    ///
    /// assert!(TaskError::fail("boom").is_retryable());
    /// assert!(!TaskError::Transform { error: "bad".into() }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, TaskError::Fail { .. } | TaskError::Timeout { .. })
    }
}

impl From<&str> for TaskError {
    fn from(error: &str) -> Self {
        TaskError::fail(error)
    }
}

impl From<String> for TaskError {
    fn from(error: String) -> Self {
        TaskError::Fail { error }
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let any = &*payload;
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
