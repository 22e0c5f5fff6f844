//! End-to-end pipelines over a fake profile service: lookups, saves,
//! empty fallbacks, error recovery and blocking sends on worker pools.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use monotask::{
    Callbacks, Event, EventKind, Outcome, PoolConfig, Subscribe, SubscriberSet, Task, TaskError,
    WorkerPool, zip,
};

const LINKEDIN: &str = "https://www.linkedin.com/in/janvi-parikh";
const GITHUB: &str = "https://github.com/janviparikh";

fn linkedin_profile() -> Task<String> {
    Task::create(LINKEDIN.to_string())
}

fn github_profile() -> Task<String> {
    Task::create(GITHUB.to_string())
}

fn missing_profile() -> Task<String> {
    Task::empty()
}

fn save(url: String) -> Task<String> {
    Task::create(format!("{url} saved"))
}

fn send_email(ms: u64, to: &'static str) -> Task<String> {
    Task::from_callable(move || {
        std::thread::sleep(Duration::from_millis(ms));
        Ok::<_, TaskError>(format!("email sent to {to}"))
    })
}

/// Records the signals an activation delivered.
fn recorder(log: Arc<Mutex<Vec<String>>>) -> Callbacks<String> {
    let (v, f, c) = (log.clone(), log.clone(), log);
    Callbacks::new()
        .with_value(move |s| v.lock().unwrap().push(format!("value:{s}")))
        .with_failure(move |e| f.lock().unwrap().push(format!("error:{}", e.as_message())))
        .with_complete(move || c.lock().unwrap().push("complete".into()))
}

#[tokio::test]
async fn next_signal() {
    let log = Arc::new(Mutex::new(Vec::new()));
    Task::create("Hello".to_string())
        .activate(recorder(log.clone()))
        .await
        .unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["value:Hello", "complete"]);
}

#[tokio::test]
async fn complete_signal() {
    let log = Arc::new(Mutex::new(Vec::new()));
    Task::<String>::empty()
        .activate(recorder(log.clone()))
        .await
        .unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["complete"]);
}

#[tokio::test]
async fn error_signal() {
    let log = Arc::new(Mutex::new(Vec::new()));
    Task::<String>::fail("Error in Hello")
        .activate(recorder(log.clone()))
        .await
        .unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["error:Error in Hello"]);
}

#[tokio::test]
async fn unhandled_error_surfaces() {
    let res = Task::<String>::fail("Error in Hello")
        .activate(Callbacks::new())
        .await;
    assert_eq!(res, Err(TaskError::fail("Error in Hello")));
}

#[tokio::test]
async fn map_to_upper() {
    let t = Task::create("Hello".to_string()).map(|s| s.to_uppercase());
    assert_eq!(t.run().await, Outcome::Value("HELLO".to_string()));
}

#[tokio::test]
async fn flat_map_save() {
    let t = linkedin_profile().flat_map(save);
    assert_eq!(t.run().await, Outcome::Value(format!("{LINKEDIN} saved")));
}

#[tokio::test]
async fn chained_flat_map() {
    let steps = Arc::new(Mutex::new(Vec::new()));
    let (s1, s2, s3) = (steps.clone(), steps.clone(), steps.clone());

    let t = linkedin_profile()
        .flat_map(move |url| {
            s1.lock().unwrap().push("save");
            save(url)
        })
        .flat_map(move |_saved| {
            s2.lock().unwrap().push("github");
            github_profile()
        })
        .flat_map(move |url| {
            s3.lock().unwrap().push("save");
            save(url)
        });

    assert_eq!(t.run().await, Outcome::Value(format!("{GITHUB} saved")));
    assert_eq!(*steps.lock().unwrap(), vec!["save", "github", "save"]);
}

#[tokio::test]
async fn zip_and_save() {
    let t = zip(linkedin_profile(), github_profile()).flat_map(|(a, b)| save(format!("{a} & {b}")));
    assert_eq!(
        t.run().await,
        Outcome::Value(format!("{LINKEDIN} & {GITHUB} saved"))
    );
}

#[tokio::test]
async fn zip_with_empty_is_empty() {
    let saves = Arc::new(AtomicUsize::new(0));
    let s = saves.clone();
    let t = zip(linkedin_profile(), missing_profile()).flat_map(move |(a, b)| {
        s.fetch_add(1, Ordering::SeqCst);
        save(format!("{a} & {b}"))
    });

    let log = Arc::new(Mutex::new(Vec::new()));
    t.activate(recorder(log.clone())).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["complete"]);
    assert_eq!(saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn switch_if_empty_uses_default_profile() {
    let defaults = Arc::new(AtomicUsize::new(0));
    let d = defaults.clone();
    let github = missing_profile().switch_if_empty(move || {
        d.fetch_add(1, Ordering::SeqCst);
        Task::create("https://github.com".to_string())
    });

    let t = linkedin_profile()
        .zip_with(github, |a, b| format!("{a} & {b}"))
        .flat_map(save);
    assert_eq!(
        t.run().await,
        Outcome::Value(format!("{LINKEDIN} & https://github.com saved"))
    );
    assert_eq!(defaults.load(Ordering::SeqCst), 1);

    // Present profile: the default is never built.
    let present = github_profile().switch_if_empty(|| Task::create("https://github.com".to_string()));
    assert_eq!(present.run().await, Outcome::Value(GITHUB.to_string()));
}

#[tokio::test]
async fn do_on_error_then_delivers_error() {
    let logged = Arc::new(Mutex::new(Vec::new()));
    let l = logged.clone();
    let t = Task::<String>::fail("Github Not Reachable")
        .do_on_error(move |e| l.lock().unwrap().push(e.as_message()));

    let log = Arc::new(Mutex::new(Vec::new()));
    t.activate(recorder(log.clone())).await.unwrap();
    assert_eq!(*logged.lock().unwrap(), vec!["Github Not Reachable"]);
    assert_eq!(*log.lock().unwrap(), vec!["error:Github Not Reachable"]);
}

#[tokio::test]
async fn on_error_resume_with_default() {
    let t = Task::<String>::fail("Github Not Reachable")
        .on_error_resume(|_| Task::create("https://github.com".to_string()))
        .flat_map(save);
    assert_eq!(
        t.run().await,
        Outcome::Value("https://github.com saved".to_string())
    );
}

#[tokio::test]
async fn from_callable_blocks_caller() {
    let t = send_email(150, "janvi");
    let started = Instant::now();
    assert_eq!(
        t.run().await,
        Outcome::Value("email sent to janvi".to_string())
    );
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn parallel_sends_on_worker_pools() {
    let first = Arc::new(WorkerPool::new(PoolConfig::elastic("email-1")).unwrap());
    let second = Arc::new(WorkerPool::new(PoolConfig::elastic("email-2")).unwrap());

    let both = zip(
        send_email(300, "linkedin").run_on(first.clone()),
        send_email(300, "github").run_on(second.clone()),
    );

    let started = Instant::now();
    assert_eq!(
        both.run().await,
        Outcome::Value((
            "email sent to linkedin".to_string(),
            "email sent to github".to_string()
        ))
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(550), "sends did not overlap: {elapsed:?}");

    first.shutdown();
    second.shutdown();
}

struct Collect(Arc<Mutex<Vec<(EventKind, Option<String>)>>>);

#[async_trait]
impl Subscribe for Collect {
    async fn on_event(&self, ev: &Event) {
        let task = ev.task.as_deref().map(str::to_string);
        self.0.lock().unwrap().push((ev.kind, task));
    }

    fn name(&self) -> &'static str {
        "collect"
    }
}

#[tokio::test]
async fn lifecycle_events_reach_subscribers() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Collect(seen.clone()))];
    let set = SubscriberSet::shared(subs);

    linkedin_profile()
        .flat_map(save)
        .named("save-profile")
        .activate_with(Callbacks::new(), set.clone())
        .await
        .unwrap();
    set.shutdown().await;

    let label = Some("save-profile".to_string());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (EventKind::Subscribed, label.clone()),
            (EventKind::Next, label.clone()),
            (EventKind::Completed, label),
        ]
    );
}
