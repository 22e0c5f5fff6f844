//! # Executors: where a bound task runs.
//!
//! A task runs on whatever context activates it unless it is bound to an
//! [`Executor`] with [`Task::run_on`](crate::Task::run_on).
//!
//! - [`Executor`], [`ExecutorRef`] - submission seam
//! - [`WorkerPool`] - caller-owned pool backed by tokio's blocking threads
//! - [`PoolConfig`] - pool name and concurrency limit

mod config;
mod executor;
mod pool;

pub use config::PoolConfig;
pub use executor::{Executor, ExecutorRef};
pub use pool::WorkerPool;
