//! Sole owner of the current language server connection.

use tracing::debug;

use crate::lsp::connection::Connection;

/// Owns at most one live [`Connection`] at any instant.
///
/// All replacements go through [`Supervisor::replace`], which disposes the
/// outgoing handle before installing the incoming one. The `Drop` impl is
/// the teardown registration: whatever exit path destroys the host context
/// also disposes the owned connection, exactly once.
#[derive(Default)]
pub struct Supervisor {
    current: Option<Box<dyn Connection>>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the currently owned connection, if any, then install `next`.
    ///
    /// The outgoing handle is disposed unconditionally, even when `next` is
    /// `None`. Dispose failures are the handle's concern and never prevent
    /// installation.
    pub fn replace(&mut self, next: Option<Box<dyn Connection>>) {
        if let Some(mut old) = self.current.take() {
            debug!("Disposing previous language server connection");
            old.dispose();
        }
        self.current = next;
    }

    /// The presently owned connection, or `None`.
    pub fn current(&self) -> Option<&dyn Connection> {
        self.current.as_deref()
    }

    /// Whether a connection is currently owned.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Terminal teardown: equivalent to `replace(None)`.
    pub fn dispose(&mut self) {
        self.replace(None);
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        self.dispose();
    }
}
