//! Combinators: functions from task(s) to a new task.
//!
//! Every combinator is lazy: it only wires producers together, and runs its
//! continuation on whatever context delivered the upstream signal. The only
//! combinator that moves work elsewhere is [`Task::run_on`](crate::Task::run_on).
//!
//! ## Contents
//! - `transform`: [`map`](crate::Task::map), [`try_map`](crate::Task::try_map),
//!   [`flat_map`](crate::Task::flat_map), [`do_on_next`](crate::Task::do_on_next)
//! - `zip`: [`zip()`], [`Task::zip`](crate::Task::zip), [`Task::zip_with`](crate::Task::zip_with)
//! - `fallback`: [`switch_if_empty`](crate::Task::switch_if_empty),
//!   [`default_if_empty`](crate::Task::default_if_empty)
//! - `recover`: [`on_error_resume`](crate::Task::on_error_resume),
//!   [`on_error_return`](crate::Task::on_error_return), [`do_on_error`](crate::Task::do_on_error)
//! - `timeout`: [`timeout`](crate::Task::timeout)
//! - `retry`: [`retry`](crate::Task::retry)
//! - `schedule`: [`run_on`](crate::Task::run_on)

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::panic_message;

mod fallback;
mod recover;
mod retry;
mod schedule;
mod timeout;
mod transform;
mod zip;

pub use zip::zip;

/// Runs a user closure, turning a panic into its message.
pub(crate) fn call_guarded<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}
