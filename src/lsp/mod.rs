//! Language server lifecycle layer
//!
//! This module owns the connection to the external `tontuna-lsp` process
//! and maps host-triggered events (activation, restart, shutdown,
//! teardown) onto it. It deliberately contains no protocol logic; the
//! server's stdio channel is handed over as an opaque transport.
//!
//! # Modules
//!
//! - [`connection`]: Connection handles and the process launcher
//! - [`supervisor`]: Sole owner of the current connection
//! - [`lifecycle`]: Bridges host events to supervisor operations
//! - [`server`]: Standalone console host loop
//! - [`error`]: Advisory error conditions reported to the user

pub mod connection;
pub mod error;
pub mod lifecycle;
pub mod server;
pub mod supervisor;
