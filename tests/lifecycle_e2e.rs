//! Lifecycle E2E tests
//!
//! Drives the lifecycle controller through the same trigger sequences an
//! editor host produces (activation, restart, shutdown, teardown) and
//! asserts the externally observable effects: launches, disposals, and
//! user notifications, in order. Connections and the notifier are
//! hand-rolled recording doubles; one test uses the real process launcher.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use tontuna_editor::host::Notifier;
use tontuna_editor::lsp::connection::{Connection, Launcher, ProcessLauncher};
use tontuna_editor::lsp::lifecycle::LifecycleController;

/// Shared, ordered record of every externally observable effect.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn position_of(&self, event: &str) -> Option<usize> {
        self.0.lock().unwrap().iter().position(|e| e == event)
    }
}

struct RecordingConnection {
    label: String,
    log: EventLog,
}

impl Connection for RecordingConnection {
    fn dispose(&mut self) {
        self.log.push(format!("dispose {}", self.label));
    }
}

/// Launcher that hands out labeled recording connections: h1, h2, ...
struct RecordingLauncher {
    log: EventLog,
    counter: AtomicU64,
}

impl RecordingLauncher {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            counter: AtomicU64::new(0),
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &str) -> anyhow::Result<Box<dyn Connection>> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let label = format!("h{n}");
        self.log.push(format!("launch {label} ({command})"));
        Ok(Box::new(RecordingConnection {
            label,
            log: self.log.clone(),
        }))
    }
}

struct RecordingNotifier {
    log: EventLog,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn info(&self, message: &str) {
        self.log.push(format!("info: {message}"));
    }

    async fn error(&self, message: &str) {
        self.log.push(format!("error: {message}"));
    }
}

fn controller_with_log(
    launch_command: Option<&str>,
    log: &EventLog,
) -> LifecycleController<RecordingLauncher, RecordingNotifier> {
    LifecycleController::new(
        launch_command.map(String::from),
        RecordingLauncher::new(log.clone()),
        RecordingNotifier { log: log.clone() },
    )
}

/// Scenarios A through D from one continuous host session: activation,
/// restart, shutdown, and a second shutdown against an empty supervisor.
#[tokio::test]
async fn activation_restart_shutdown_session() {
    let log = EventLog::default();
    let mut controller = controller_with_log(Some("tontuna-lsp"), &log);

    // A: activation starts h1
    controller.activate().unwrap();
    assert!(controller.is_active());
    assert_eq!(log.events(), vec!["launch h1 (tontuna-lsp)"]);

    // B: restart disposes h1, installs h2
    controller.restart().await.unwrap();
    assert!(controller.is_active());

    // C: shutdown disposes h2, clears ownership
    controller.shutdown().await;
    assert!(!controller.is_active());

    // D: a second shutdown is advisory only
    controller.shutdown().await;
    assert!(!controller.is_active());

    assert_eq!(
        log.events(),
        vec![
            "launch h1 (tontuna-lsp)",
            "info: Restarting tontuna language server",
            "launch h2 (tontuna-lsp)",
            "dispose h1",
            "info: Shutting down tontuna language server",
            "dispose h2",
            "error: Tontuna language server is not running",
        ]
    );
}

/// Scenario E: no configured command means activation leaves the
/// supervisor empty and restart is advisory only.
#[tokio::test]
async fn disabled_integration_restart_is_advisory() {
    let log = EventLog::default();
    let mut controller = controller_with_log(None, &log);

    controller.activate().unwrap();
    assert!(!controller.is_active());

    controller.restart().await.unwrap();
    assert!(!controller.is_active());

    assert_eq!(
        log.events(),
        vec!["error: No tontuna language server configured"]
    );
}

#[tokio::test]
async fn restart_disposes_old_handle_before_new_becomes_current() {
    let log = EventLog::default();
    let mut controller = controller_with_log(Some("tontuna-lsp"), &log);

    controller.activate().unwrap();
    controller.restart().await.unwrap();

    // h1 must be gone by the time the restart returns; shutting down now
    // must dispose h2, proving h2 (not h1) is the current handle.
    let dispose_h1 = log.position_of("dispose h1").expect("h1 disposed");
    controller.shutdown().await;
    let dispose_h2 = log.position_of("dispose h2").expect("h2 disposed");
    assert!(dispose_h1 < dispose_h2);

    // Teardown after the session has nothing left to dispose.
    controller.dispose();
    assert_eq!(log.events().iter().filter(|e| *e == "dispose h1").count(), 1);
    assert_eq!(log.events().iter().filter(|e| *e == "dispose h2").count(), 1);
}

#[tokio::test]
async fn teardown_disposes_active_connection_exactly_once() {
    let log = EventLog::default();
    let mut controller = controller_with_log(Some("tontuna-lsp"), &log);

    controller.activate().unwrap();
    controller.dispose();

    assert_eq!(
        log.events(),
        vec!["launch h1 (tontuna-lsp)", "dispose h1"]
    );
}

/// Same session against a real spawned process, with `cat` standing in
/// for the language server.
#[tokio::test]
async fn real_process_session_with_cat() {
    let log = EventLog::default();
    let mut controller = LifecycleController::new(
        Some("cat".to_string()),
        ProcessLauncher,
        RecordingNotifier { log: log.clone() },
    );

    controller.activate().unwrap();
    assert!(controller.is_active());

    controller.restart().await.unwrap();
    assert!(controller.is_active());

    controller.shutdown().await;
    assert!(!controller.is_active());

    controller.dispose();

    assert_eq!(
        log.events(),
        vec![
            "info: Restarting tontuna language server",
            "info: Shutting down tontuna language server",
        ]
    );
}
