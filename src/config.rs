use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Conventional launch command for the Tontuna language server.
pub const DEFAULT_SERVER_COMMAND: &str = "tontuna-lsp";

/// Language id of documents the server analyzes. Protocol-level document
/// wiring lives in the transport layer; the constant is exposed for hosts
/// that need it.
pub const LANGUAGE_ID: &str = "tontuna";

/// File name used by the log appender inside [`data_dir`].
pub const LOG_FILE_NAME: &str = "tontuna-editor.log";

/// Host configuration for the shim.
///
/// The launch command is resolved once, at activation. A missing key means
/// "use the conventional command"; an explicit `null` means the integration
/// is disabled. The two states are distinct on purpose: `None` is never a
/// stand-in for "use default".
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ShimConfig {
    /// Launch command or path for the language server. `null` disables the
    /// integration entirely.
    pub language_server_path: Option<String>,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            language_server_path: Some(DEFAULT_SERVER_COMMAND.to_string()),
        }
    }
}

/// Load the host configuration from a JSON file.
///
/// An absent file behaves like an empty configuration object: every field
/// takes its default, so the server integration is enabled with the
/// conventional command.
pub fn load_config(path: &Path) -> anyhow::Result<ShimConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ShimConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Returns the path to the data directory for tontuna-editor.
/// Uses $XDG_DATA_HOME/tontuna-editor if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/tontuna-editor,
/// or ./tontuna-editor if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path to the host configuration file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("tontuna-editor")
}
