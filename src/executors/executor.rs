use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::TaskError;

/// Shared handle to an executor.
pub type ExecutorRef = Arc<dyn Executor>;

/// Something that runs submitted jobs off the submitting context.
///
/// Implementors must either take ownership of the job and eventually run or drop it,
/// or refuse it by returning an error. A dropped job makes the bound task fail with
/// [`TaskError::Dropped`].
pub trait Executor: Send + Sync + 'static {
    /// Name used in errors and logs.
    fn name(&self) -> &str;

    /// Submits `job` for execution.
    ///
    /// # Errors
    /// [`TaskError::Rejected`] when the executor no longer accepts work.
    fn execute(&self, job: BoxFuture<'static, ()>) -> Result<(), TaskError>;
}
