//! Connection handles for the external language server process.
//!
//! A [`Connection`] is one running server: the spawned process plus its
//! stdio transport channel. Disposal is fire-and-forget; this layer never
//! waits on the process or sequences multiple operations.

use std::process::Stdio;

#[cfg(test)]
use mockall::automock;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, info};

/// One running language server connection.
///
/// Ownership is exclusive: a handle is created by a [`Launcher`], handed to
/// the supervisor, and disposed exactly once when replaced or at teardown.
#[cfg_attr(test, automock)]
pub trait Connection: Send {
    /// Release the transport channel and terminate the server process.
    ///
    /// Idempotent: a second call performs no work. Failures stay inside
    /// the handle; callers install replacements regardless.
    fn dispose(&mut self);
}

/// Starts connections for a given launch command.
#[cfg_attr(test, automock)]
pub trait Launcher: Send + Sync {
    /// Spawn the server executable and establish its transport channel.
    ///
    /// A spawn failure (for example, the executable is not installed) is a
    /// transport-level error and propagates untranslated.
    fn launch(&self, command: &str) -> anyhow::Result<Box<dyn Connection>>;
}

/// A language server reached over the standard input/output of a spawned
/// child process.
pub struct ServerProcess {
    child: Child,
    stdio: Option<(ChildStdin, ChildStdout)>,
    disposed: bool,
}

impl ServerProcess {
    /// Spawn `command` with piped stdio.
    ///
    /// The child is configured with `kill_on_drop` so the process cannot
    /// outlive its handle even on abnormal exit paths.
    pub fn spawn(command: &str) -> std::io::Result<Self> {
        let mut child = Command::new(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        info!("Started language server: {} (pid {:?})", command, child.id());

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stdio = stdin.zip(stdout);

        Ok(Self {
            child,
            stdio,
            disposed: false,
        })
    }

    /// Hand out the raw transport channel for a protocol layer to drive.
    /// Returns `None` once taken or after disposal.
    pub fn take_stdio(&mut self) -> Option<(ChildStdin, ChildStdout)> {
        self.stdio.take()
    }
}

impl Connection for ServerProcess {
    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        // Closing stdin signals the server to exit; the kill covers servers
        // that ignore it.
        self.stdio = None;
        match self.child.start_kill() {
            Ok(()) => info!("Terminated language server (pid {:?})", self.child.id()),
            Err(e) => debug!("Language server already exited: {}", e),
        }
    }
}

/// Production launcher: each launch spawns a fresh [`ServerProcess`].
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &str) -> anyhow::Result<Box<dyn Connection>> {
        let process = ServerProcess::spawn(command)?;
        Ok(Box::new(process))
    }
}
