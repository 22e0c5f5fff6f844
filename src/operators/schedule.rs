//! # Executor binding.
//!
//! ```text
//! activation ──► executor.execute(job) ──► (pool thread) upstream.run() ──► oneshot ──► activation
//!                    └─ Err(e) ─► Failure(e)                    job lost ─► Failure(Dropped)
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::select;
use tokio::sync::oneshot;

use crate::error::TaskError;
use crate::executors::ExecutorRef;
use crate::tasks::{Outcome, Task, guarded};

impl<T: Send + 'static> Task<T> {
    /// Runs this task on `executor` instead of the activating context.
    ///
    /// The job is submitted when the activation is first polled. Continuations added
    /// after `run_on` run wherever the result is delivered. If the activation goes away
    /// first, a job that has not produced its outcome yet is abandoned; a blocking
    /// producer already on its thread still runs to completion.
    pub fn run_on(self, executor: ExecutorRef) -> Task<T> {
        self.derive(move |upstream| {
            let upstream = upstream.clone();
            let executor = Arc::clone(&executor);
            Box::pin(async move {
                let (mut tx, rx) = oneshot::channel();
                let job = async move {
                    let run = guarded(async move { upstream.run().await });
                    select! {
                        out = run => {
                            let _ = tx.send(out);
                        }
                        _ = tx.closed() => {}
                    }
                }
                .boxed();

                if let Err(e) = executor.execute(job) {
                    return Outcome::Failure(e);
                }
                match rx.await {
                    Ok(out) => out,
                    Err(_lost) => Outcome::Failure(TaskError::Dropped {
                        executor: executor.name().to_string(),
                    }),
                }
            })
        })
    }
}
