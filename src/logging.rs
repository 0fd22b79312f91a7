//! Tracing subscriber setup
//!
//! CLI mode logs to stderr. TUI mode owns the terminal, so logs go to a
//! daily-rolling file under the cache directory instead.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "MARQUEE_LOG";

/// Filter from MARQUEE_LOG, else config `log_level`, else `fallback`
pub fn env_filter(config: &Config, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = config.log_level.as_deref().unwrap_or(fallback);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(fallback))
    })
}

/// Directory holding TUI log files (~/.cache/marquee)
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("marquee"))
}

/// Log to stderr; quiet mode only lets errors through
pub fn init_stderr(config: &Config, quiet: bool) {
    let fallback = if quiet { "error" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, fallback))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a rolling file; the guard must live until the TUI exits
pub fn init_file(config: &Config) -> Option<WorkerGuard> {
    let dir = log_dir()?;
    // No log file when the cache dir is unwritable
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "marquee.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, "info"))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
