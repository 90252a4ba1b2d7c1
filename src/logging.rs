//! Diagnostic logging to `~/.porta/porta.log`.
//!
//! Stdout belongs to the TUI, so tracing output goes to a file through a
//! non-blocking appender. Failure to set this up is not fatal: the demo
//! runs fine without diagnostics.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter when `PORTA_LOG` is unset.
const DEFAULT_FILTER: &str = "porta=debug";

/// Install the file subscriber. The returned guard must be held for the
/// process lifetime so buffered log lines are flushed on exit.
pub fn init() -> Option<WorkerGuard> {
    let dir = dirs::home_dir()?.join(".porta");
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, "porta.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("PORTA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
