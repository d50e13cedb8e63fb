//! Tracing setup.
//!
//! The clock owns the terminal, so log lines only go to the file named by
//! `TERMCLOCK_LOG`. Without it events are discarded.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TERMCLOCK_LOG";

/// Keeps the background log writer alive; drop it last.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Install the global subscriber. Filter comes from `RUST_LOG`.
pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    let Some(path) = log_file_path_from_env() else {
        return TelemetryGuard::disabled();
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, guard) = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(non_blocking), guard)
        }
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), err);
            return TelemetryGuard::disabled();
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(true)
        .with_ansi(false)
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard {
        _guard: Some(guard),
    }
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
