//! # Worker pool configuration.
//!
//! ## Sentinel values
//! - `max_concurrent = 0` → unlimited (no semaphore created)

/// Settings for a [`WorkerPool`](crate::WorkerPool).
///
/// ## Field semantics
/// - `name`: label carried by errors and logs (`Rejected { executor }`, ...)
/// - `max_concurrent`: jobs running at once (`0` = unlimited)
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Pool name.
    pub name: String,

    /// Maximum number of jobs running simultaneously.
    ///
    /// - `0` = unlimited (no semaphore)
    /// - `n > 0` = at most `n` jobs run, the rest wait for a slot
    pub max_concurrent: usize,
}

impl PoolConfig {
    /// Unbounded pool named `name`.
    pub fn elastic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_concurrent: 0,
        }
    }

    /// Pool named `name` running at most `max_concurrent` jobs at once.
    ///
    /// `0` still means unlimited.
    pub fn bounded(name: impl Into<String>, max_concurrent: usize) -> Self {
        Self {
            name: name.into(),
            max_concurrent,
        }
    }

    /// Returns the concurrency limit as an `Option`.
    ///
    /// - `None` → unlimited (no semaphore)
    /// - `Some(n)` → at most `n` concurrent jobs
    #[inline]
    pub fn concurrency_limit(&self) -> Option<usize> {
        if self.max_concurrent == 0 {
            None
        } else {
            Some(self.max_concurrent)
        }
    }
}

impl Default for PoolConfig {
    /// Elastic pool named `"worker"`.
    fn default() -> Self {
        Self::elastic("worker")
    }
}
