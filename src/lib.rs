//! Editor integration shim for the Tontuna language server.
//!
//! The crate launches `tontuna-lsp` as an external process, hands the
//! resulting connection to a supervisor that owns at most one live
//! connection at a time, and maps the host's restart/shutdown commands
//! onto that supervisor. All language analysis and protocol framing live
//! in the external server; this crate only manages the connection
//! lifecycle.

pub mod config;
pub mod host;
pub mod lsp;
