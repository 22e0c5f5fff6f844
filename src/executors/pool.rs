//! # Caller-owned worker pool.
//!
//! ```text
//! execute(job)
//!   ├─► shut down?  ─► Err(Rejected)
//!   └─► spawn on runtime:
//!         ├─► acquire permit (optional, cancellable by shutdown)
//!         │     └─ shutdown while waiting ─► job dropped
//!         └─► spawn_blocking(block_on(job))
//! ```
//!
//! ## Rules
//! - Jobs run on tokio's blocking threads, so a blocking producer only holds its own thread.
//! - At most `max_concurrent` jobs run at once (`0` = unlimited).
//! - `shutdown()` rejects new jobs and drops the ones still waiting for a slot;
//!   running jobs finish.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::select;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::error::{RuntimeError, TaskError};
use crate::executors::config::PoolConfig;
use crate::executors::executor::Executor;

/// Worker pool bound to a tokio runtime.
///
/// ```rust
/// use std::sync::Arc;
/// use monotask::{Outcome, PoolConfig, Task, WorkerPool};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), monotask::RuntimeError> {
/// let pool = Arc::new(WorkerPool::new(PoolConfig::elastic("email"))?);
/// let sent = Task::from_callable(|| Ok::<_, monotask::TaskError>("email sent"))
///     .run_on(pool.clone());
/// assert_eq!(sent.run().await, Outcome::Value("email sent"));
/// pool.shutdown();
/// # Ok(())
/// # }
/// ```
pub struct WorkerPool {
    name: Arc<str>,
    handle: Handle,
    semaphore: Option<Arc<Semaphore>>,
    token: CancellationToken,
}

impl WorkerPool {
    /// Creates a pool on the current tokio runtime.
    ///
    /// # Errors
    /// [`RuntimeError::NoRuntime`] when called outside a runtime.
    pub fn new(cfg: PoolConfig) -> Result<Self, RuntimeError> {
        let handle = Handle::try_current().map_err(|_| RuntimeError::NoRuntime {
            executor: cfg.name.clone(),
        })?;
        Ok(Self::with_handle(cfg, handle))
    }

    /// Creates a pool that runs its jobs on the runtime behind `handle`.
    pub fn with_handle(cfg: PoolConfig, handle: Handle) -> Self {
        let semaphore = cfg.concurrency_limit().map(|n| Arc::new(Semaphore::new(n)));
        Self {
            name: Arc::from(cfg.name),
            handle,
            semaphore,
            token: CancellationToken::new(),
        }
    }

    /// Stops accepting jobs and drops the ones waiting for a slot.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`WorkerPool::shutdown`] was called.
    pub fn is_shutdown(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("bounded", &self.semaphore.is_some())
            .field("shutdown", &self.is_shutdown())
            .finish()
    }
}

impl Executor for WorkerPool {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, job: BoxFuture<'static, ()>) -> Result<(), TaskError> {
        if self.token.is_cancelled() {
            tracing::debug!(executor = %self.name, "job rejected, pool is shut down");
            return Err(TaskError::Rejected {
                executor: self.name.to_string(),
            });
        }

        let name = Arc::clone(&self.name);
        let handle = self.handle.clone();
        let semaphore = self.semaphore.clone();
        let token = self.token.clone();

        self.handle.spawn(async move {
            let _permit = match semaphore {
                Some(sem) => {
                    let permit_future = sem.acquire_owned();
                    tokio::pin!(permit_future);

                    select! {
                        biased;
                        _ = token.cancelled() => {
                            tracing::debug!(executor = %name, "queued job dropped on shutdown");
                            return;
                        }
                        res = &mut permit_future => match res {
                            Ok(permit) => Some(permit),
                            Err(_closed) => return,
                        },
                    }
                }
                None => None,
            };

            let runner = handle.clone();
            if let Err(e) = handle.spawn_blocking(move || runner.block_on(job)).await {
                tracing::warn!(executor = %name, error = %e, "pool job aborted");
            }
        });
        Ok(())
    }
}
