use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tontuna-editor")]
#[command(version, about = "Editor integration shim for the Tontuna language server")]
struct Cli {
    /// Path to the host configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // All supervisor mutations are serialized on one cooperative event loop,
    // so a current-thread runtime is sufficient.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(tontuna_editor::lsp::server::run_host(cli.config))
}
