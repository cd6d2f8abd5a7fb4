use std::path::PathBuf;

use clap::Parser;
use lanes::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "lanes")]
#[command(about = "A terminal multi-panel list navigator")]
struct Args {
    /// Directory for the log file (default: ~/.lanes/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lanes")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);

    init_logging(&log_dir, &args.log_level)?;

    let mut app = App::new();

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("failed to restore terminal: {err}");
    }

    Ok(())
}
