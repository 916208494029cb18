use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::Context;
use tokio::task;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rotated files older than this are pruned
const LOG_RETENTION: Duration = Duration::from_secs(60 * 60 * 24 * 3);
const PRUNE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Keeps the file writer alive. Dropping it flushes pending lines.
#[allow(dead_code)]
pub struct LoggerGuard(WorkerGuard);

/// Console plus daily-rotated file logging. `RUST_LOG` directives are layered
/// on top of `level`. Must be called inside a tokio runtime.
pub fn init_logging(
    log_dir: impl AsRef<Path>,
    prefix: &str,
    level: &str,
) -> anyhow::Result<LoggerGuard> {
    let log_dir = log_dir.as_ref().to_path_buf();
    let requested = level;
    let level = normalize_level(requested);

    let builder = EnvFilter::builder().with_default_directive(level.parse()?);
    let directives = std::env::var("RUST_LOG").unwrap_or_default();
    let console_filter = builder.clone().parse_lossy(&directives);
    let file_filter = builder.parse_lossy(&directives);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(&log_dir)
        .context(format!("Failed to create log appender in {:?}", log_dir))?;
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .context("Global tracing subscriber already set")?;

    if level != requested {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", requested);
    }

    spawn_log_pruner(log_dir, prefix.to_string());

    Ok(LoggerGuard(guard))
}

fn normalize_level(level: &str) -> &str {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    }
}

/// Hourly sweep of expired log files for `prefix`.
fn spawn_log_pruner(log_dir: PathBuf, prefix: String) {
    task::spawn(async move {
        let mut ticker = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            match prune_expired_logs(&log_dir, &prefix, LOG_RETENTION) {
                Ok(pruned) if !pruned.is_empty() => {
                    tracing::info!("Pruned {} expired log files", pruned.len())
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Log pruning skipped for {:?}: {}", log_dir, e),
            }
        }
    });
}

/// Delete `<prefix>*.log` files last written more than `retention` ago and
/// return their paths. A file that cannot be inspected or removed is
/// skipped; only an unreadable directory is an error.
fn prune_expired_logs(
    log_dir: &Path,
    prefix: &str,
    retention: Duration,
) -> std::io::Result<Vec<String>> {
    let cutoff = SystemTime::now()
        .checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let expired = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix) && n.ends_with(".log"))
        })
        .filter(|path| {
            fs::metadata(path)
                .and_then(|m| m.modified())
                .is_ok_and(|modified| modified < cutoff)
        });

    let mut pruned = Vec::new();
    for path in expired {
        match fs::remove_file(&path) {
            Ok(()) => pruned.push(path.to_string_lossy().into_owned()),
            Err(e) => tracing::warn!("Could not remove log file {:?}: {}", path, e),
        }
    }
    Ok(pruned)
}
