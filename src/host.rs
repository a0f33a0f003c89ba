//! Host capability surfaces consumed by the shim.
//!
//! The editor host provides a notification surface and a command-dispatch
//! facility; both are modeled as explicit inputs so the lifecycle logic
//! stays independent of any particular editor's callback mechanism.

use std::str::FromStr;

#[cfg(test)]
use mockall::automock;
use tracing::{error, info};

/// UI notification surface of the host.
///
/// Informational messages report successful restart/shutdown; error
/// messages report the advisory conditions in [`crate::lsp::error`].
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Show an informational message to the user
    async fn info(&self, message: &str);

    /// Show an error message to the user
    async fn error(&self, message: &str);
}

/// Notifier that prints to stdout, for the standalone console host.
/// Messages are mirrored to the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

#[async_trait::async_trait]
impl Notifier for ConsoleNotifier {
    async fn info(&self, message: &str) {
        info!("{}", message);
        println!("info: {message}");
    }

    async fn error(&self, message: &str) {
        error!("{}", message);
        println!("error: {message}");
    }
}

/// Commands the host can dispatch to the shim.
///
/// `RestartServer` and `ShutdownServer` are the two user-facing command
/// identifiers; `Quit` exits the standalone host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    RestartServer,
    ShutdownServer,
    Quit,
}

impl FromStr for HostCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restart" => Ok(Self::RestartServer),
            "shutdown" => Ok(Self::ShutdownServer),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(UnknownCommand),
        }
    }
}

/// Input line did not name a known host command.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command")]
pub struct UnknownCommand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_command_parses_known_verbs() {
        assert_eq!("restart".parse(), Ok(HostCommand::RestartServer));
        assert_eq!("shutdown".parse(), Ok(HostCommand::ShutdownServer));
        assert_eq!("quit".parse(), Ok(HostCommand::Quit));
        assert_eq!("exit".parse(), Ok(HostCommand::Quit));
    }

    #[test]
    fn host_command_rejects_unknown_input() {
        assert!("reboot".parse::<HostCommand>().is_err());
        assert!("".parse::<HostCommand>().is_err());
    }
}
