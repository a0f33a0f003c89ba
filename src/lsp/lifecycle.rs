//! Bridges host-triggered events to supervisor operations.
//!
//! Three triggers exist: activation, an explicit restart request, and an
//! explicit shutdown request. Each runs to completion on the host's event
//! loop before the next is dispatched, so "dispose old, then install new"
//! can never interleave with another trigger.

use tracing::info;

use crate::host::Notifier;
use crate::lsp::connection::Launcher;
use crate::lsp::error::ShimError;
use crate::lsp::supervisor::Supervisor;

/// Drives the supervisor from a single configuration-sourced launch
/// command.
///
/// The command is resolved once, at construction; editing the host
/// configuration afterwards has no effect until the next activation.
pub struct LifecycleController<L: Launcher, N: Notifier> {
    launch_command: Option<String>,
    launcher: L,
    notifier: N,
    supervisor: Supervisor,
}

impl<L: Launcher, N: Notifier> LifecycleController<L, N> {
    /// `launch_command = None` means the integration is disabled.
    pub fn new(launch_command: Option<String>, launcher: L, notifier: N) -> Self {
        Self {
            launch_command,
            launcher,
            notifier,
            supervisor: Supervisor::new(),
        }
    }

    /// Host activation: start the server if a command is configured,
    /// otherwise leave the supervisor empty.
    pub fn activate(&mut self) -> anyhow::Result<()> {
        match self.launch_command.clone() {
            Some(command) => {
                let connection = self.launcher.launch(&command)?;
                self.supervisor.replace(Some(connection));
            }
            None => {
                info!("Language server integration disabled by configuration");
            }
        }
        Ok(())
    }

    /// Restart request: start a fresh connection with the configured
    /// command, replacing (and thereby disposing) whatever was active.
    ///
    /// Does not require a live connection; with no configured command it
    /// reports [`ShimError::NoServerConfigured`] and mutates nothing.
    pub async fn restart(&mut self) -> anyhow::Result<()> {
        let Some(command) = self.launch_command.clone() else {
            self.notifier
                .error(&ShimError::NoServerConfigured.to_string())
                .await;
            return Ok(());
        };

        self.notifier.info("Restarting tontuna language server").await;
        let connection = self.launcher.launch(&command)?;
        self.supervisor.replace(Some(connection));
        Ok(())
    }

    /// Shutdown request: dispose the active connection.
    ///
    /// With no active connection it reports
    /// [`ShimError::NoActiveConnection`] and mutates nothing.
    pub async fn shutdown(&mut self) {
        if self.supervisor.is_active() {
            self.notifier
                .info("Shutting down tontuna language server")
                .await;
            self.supervisor.replace(None);
        } else {
            self.notifier
                .error(&ShimError::NoActiveConnection.to_string())
                .await;
        }
    }

    /// Whether a server connection is currently active.
    pub fn is_active(&self) -> bool {
        self.supervisor.is_active()
    }

    /// Host teardown: dispose the supervisor (and any owned connection).
    /// The controller must not be used afterwards.
    pub fn dispose(&mut self) {
        self.supervisor.dispose();
    }
}
