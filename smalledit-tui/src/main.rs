mod app;
mod config;
mod dialogs;
mod keymap;
mod render;
mod viewport;

use app::App;
use clap::Parser;
use config::Config;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// A small terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "smalledit", version, about)]
struct Args {
    /// File to open; created on first save if it does not exist
    file: Option<PathBuf>,
}

fn log_path() -> PathBuf {
    std::env::var_os("SMALLEDIT_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("smalledit.log"))
}

/// Log to a file; stdout belongs to the terminal UI. If the file cannot be
/// created logging is left off.
fn init_tracing() {
    let Ok(file) = File::create(log_path()) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and usage errors are printed, the exit status stays 0.
            let _ = err.print();
            return;
        }
    };

    init_tracing();
    tracing::info!("Starting smalledit");

    let mut app = App::new(Config::load());
    app.open_initial(args.file.as_deref());
    tracing::debug!("{} lines loaded", app.document().state().line_count());

    if let Err(err) = app.run() {
        tracing::error!("Editor stopped: {:#}", err);
        eprintln!("smalledit: {:#}", err);
    }
}
