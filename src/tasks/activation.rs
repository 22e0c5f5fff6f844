//! # Activation: driving a task to its terminal signal.
//!
//! [`Activation`] is the future returned by [`Task::activate`](crate::Task::activate).
//! Whoever awaits it runs the pipeline (caller-driven scheduling); nothing is spawned.
//!
//! ## Flow
//! ```text
//! activate(observer)
//!   ├─► publish Subscribed
//!   ├─► race: pipeline outcome  vs  Canceller::cancel()
//!   │      ├─ cancelled first ──► publish Canceled, observer untouched, Ok(())
//!   │      └─ outcome first
//!   │           ├─ Value(v)   ──► publish Next, on_value(v), publish Completed, on_complete()
//!   │           ├─ Empty      ──► publish Completed, on_complete()
//!   │           └─ Failure(e) ──► publish Failed, on_failure(e) ──► Ok(()) | Err(e)
//!   └─► resolves
//! ```
//!
//! ## Rules
//! - Exactly one terminal signal is delivered per activation, or none if cancelled.
//! - Cancellation is best-effort: a producer blocking its thread is not interrupted,
//!   only the delivery is suppressed.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::events::{Event, EventKind};
use crate::subscribers::SubscriberSet;
use crate::tasks::observer::Observer;
use crate::tasks::outcome::Outcome;
use crate::tasks::task::Task;

/// Handle used to cancel an [`Activation`] from elsewhere.
#[derive(Clone, Debug)]
pub struct Canceller {
    token: CancellationToken,
}

impl Canceller {
    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// One activation of a task, resolved by awaiting it.
///
/// Resolves to `Err(error)` only when the pipeline failed and the observer handed
/// the failure back (see [`Observer::on_failure`]).
#[must_use = "an activation does nothing unless awaited"]
pub struct Activation {
    token: CancellationToken,
    fut: BoxFuture<'static, Result<(), TaskError>>,
}

impl Activation {
    pub(crate) fn new<T, O>(
        task: &Task<T>,
        observer: O,
        subscribers: Option<Arc<SubscriberSet>>,
    ) -> Self
    where
        T: Send + 'static,
        O: Observer<T>,
    {
        let token = CancellationToken::new();
        let probe = Probe {
            subscribers,
            task: task.label().map(Arc::from),
        };
        let fut = Box::pin(drive(task.run(), observer, token.clone(), probe));
        Self { token, fut }
    }

    /// Returns a handle that can cancel this activation from another context.
    pub fn canceller(&self) -> Canceller {
        Canceller {
            token: self.token.clone(),
        }
    }

    /// Requests cancellation of this activation.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Future for Activation {
    type Output = Result<(), TaskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.fut.as_mut().poll(cx)
    }
}

async fn drive<T, O>(
    run: BoxFuture<'static, Outcome<T>>,
    mut observer: O,
    token: CancellationToken,
    probe: Probe,
) -> Result<(), TaskError>
where
    T: Send + 'static,
    O: Observer<T>,
{
    probe.publish(EventKind::Subscribed, None);

    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        out = run => Some(out),
    };

    // Cancellation may land while a blocking producer holds the thread.
    let outcome = match outcome {
        Some(out) if !token.is_cancelled() => out,
        _ => {
            probe.publish(EventKind::Canceled, None);
            return Ok(());
        }
    };

    match outcome {
        Outcome::Value(value) => {
            probe.publish(EventKind::Next, None);
            observer.on_value(value);
            probe.publish(EventKind::Completed, None);
            observer.on_complete();
            Ok(())
        }
        Outcome::Empty => {
            probe.publish(EventKind::Completed, None);
            observer.on_complete();
            Ok(())
        }
        Outcome::Failure(error) => {
            probe.publish(EventKind::Failed, Some(error.as_message()));
            observer.on_failure(error)
        }
    }
}

/// Publishes lifecycle events of one activation, if subscribers are attached.
struct Probe {
    subscribers: Option<Arc<SubscriberSet>>,
    task: Option<Arc<str>>,
}

impl Probe {
    fn publish(&self, kind: EventKind, reason: Option<String>) {
        let Some(subs) = &self.subscribers else {
            return;
        };
        let mut ev = Event::new(kind).with_current_thread();
        if let Some(task) = &self.task {
            ev = ev.with_task(Arc::clone(task));
        }
        if let Some(reason) = reason {
            ev = ev.with_reason(reason);
        }
        subs.emit_arc(Arc::new(ev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executors::{PoolConfig, WorkerPool};
    use crate::subscribers::Subscribe;
    use crate::tasks::observer::Callbacks;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn recorder<T: Send + 'static>() -> (Callbacks<T>, Arc<Mutex<Vec<String>>>)
    where
        T: std::fmt::Debug,
    {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let cb = Callbacks::new()
            .with_value(move |v| a.lock().unwrap().push(format!("value:{v:?}")))
            .with_failure(move |e| b.lock().unwrap().push(format!("failure:{}", e.as_message())))
            .with_complete(move || c.lock().unwrap().push("complete".to_string()));
        (cb, log)
    }

    #[tokio::test]
    async fn test_value_then_complete() {
        let (cb, log) = recorder();
        Task::create("Hello").activate(cb).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["value:\"Hello\"", "complete"]);
    }

    #[tokio::test]
    async fn test_empty_only_completes() {
        let (cb, log) = recorder::<String>();
        Task::empty().activate(cb).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["complete"]);
    }

    #[tokio::test]
    async fn test_failure_only_fails() {
        let (cb, log) = recorder::<String>();
        Task::fail("Error in Hello").activate(cb).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["failure:Error in Hello"]);
    }

    #[tokio::test]
    async fn test_unhandled_failure_is_returned() {
        let res = Task::<u8>::fail("nobody listens")
            .activate(Callbacks::new())
            .await;
        assert_eq!(res, Err(TaskError::fail("nobody listens")));
    }

    #[tokio::test]
    async fn test_cancel_before_await_suppresses_delivery() {
        let (cb, log) = recorder();
        let act = Task::create(1u8).activate(cb);
        act.cancel();
        assert!(act.is_cancelled());
        act.await.unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_pending() {
        let (cb, log) = recorder();
        let slow = Task::from_producer(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Outcome::Value(1u8)
        });
        let act = slow.activate(cb);
        let canceller = act.canceller();
        let handle = tokio::spawn(act);

        tokio::time::sleep(Duration::from_secs(1)).await;
        canceller.cancel();
        handle.await.unwrap().unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancel_while_blocking_on_pool() {
        let pool = Arc::new(WorkerPool::new(PoolConfig::elastic("email")).unwrap());
        let sent = Arc::new(AtomicBool::new(false));
        let s = sent.clone();
        let send = Task::from_callable(move || {
            std::thread::sleep(Duration::from_millis(200));
            s.store(true, Ordering::SeqCst);
            Ok::<_, TaskError>("email sent")
        })
        .run_on(pool);

        let (cb, log) = recorder();
        let act = send.activate(cb);
        let canceller = act.canceller();
        let handle = tokio::spawn(act);

        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
        handle.await.unwrap().unwrap();
        assert!(!sent.load(Ordering::SeqCst));

        // The producer keeps its thread and finishes; only delivery is suppressed.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(sent.load(Ordering::SeqCst));
        assert!(log.lock().unwrap().is_empty());
    }

    struct Reasons(Arc<Mutex<Vec<String>>>);

    #[async_trait]
    impl Subscribe for Reasons {
        async fn on_event(&self, ev: &Event) {
            if let Some(reason) = ev.reason.as_deref() {
                self.0.lock().unwrap().push(reason.to_string());
            }
        }
    }

    #[tokio::test]
    async fn test_failed_event_carries_bare_message() {
        let reasons = Arc::new(Mutex::new(Vec::new()));
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Reasons(reasons.clone()))];
        let set = SubscriberSet::shared(subs);

        let res = Task::<u8>::fail("Github Not Reachable")
            .named("github")
            .activate_with(Callbacks::new(), set.clone())
            .await;
        assert!(res.is_err());
        set.shutdown().await;

        assert_eq!(*reasons.lock().unwrap(), vec!["Github Not Reachable".to_string()]);
    }
}
