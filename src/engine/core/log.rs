use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter (e.g. `AMFPROXY_LOG=debug`)
pub const LOG_ENV: &str = "AMFPROXY_LOG";

const RUN_LOG_HEADER: &str = "==== amfproxy per-run log ====";

/// Install the stderr tracing subscriber.
/// Defaults to `warn` so ffmpeg's own stderr output stays readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// `amfproxy-2025-01-31-14-05-09.log`
pub fn run_log_file_name(now: &DateTime<Local>) -> String {
    format!("amfproxy-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}

pub fn render_run_log(original: &str, final_cmd: &str) -> String {
    format!(
        "{}\nOriginal command: {}\nFinal command: {}\n",
        RUN_LOG_HEADER, original, final_cmd
    )
}

/// Write the per-run log into `dir`, creating it if needed.
/// Returns the path written.
pub fn write_run_log(dir: &Path, original: &str, final_cmd: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let log_path = dir.join(run_log_file_name(&Local::now()));
    let mut file = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create run log: {}", log_path.display()))?;

    file.write_all(render_run_log(original, final_cmd).as_bytes())
        .with_context(|| format!("Failed to write run log: {}", log_path.display()))?;

    Ok(log_path)
}
