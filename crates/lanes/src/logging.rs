//! File logging setup.
//!
//! The TUI owns stdout, so log lines go to `lanes.log` under the log
//! directory. The filter honors `RUST_LOG` and falls back to the level
//! given on the command line.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log files larger than this are truncated at startup.
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Start over if a previous run left the log oversized.
fn truncate_oversized_log(log_path: &Path) -> io::Result<()> {
    match fs::metadata(log_path) {
        Ok(meta) if meta.len() > MAX_LOG_SIZE => {
            File::create(log_path)?;
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Install the global tracing subscriber, writing to `{log_dir}/lanes.log`.
///
/// `level` applies to this workspace's crates; `RUST_LOG` overrides the
/// whole filter when set.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join("lanes.log");
    truncate_oversized_log(&log_path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("lanes={level},lanes_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!("logging initialized (log_path={})", log_path.display());
    Ok(())
}
