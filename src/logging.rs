//! Log filter and writer for the binary
//!
//! Log lines go to stderr, except while the TUI holds the alternate screen:
//! a [`StderrPause`] guard swaps the writer for a sink until it is dropped.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "bubbletty=info";

static STDERR_PAUSED: AtomicBool = AtomicBool::new(false);

/// Build the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_FILTER`]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Writer handed to the subscriber for each log line
pub fn log_writer() -> Box<dyn io::Write> {
    if STDERR_PAUSED.load(Ordering::Relaxed) {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

pub fn is_stderr_paused() -> bool {
    STDERR_PAUSED.load(Ordering::Relaxed)
}

/// Drops log output until this guard goes out of scope
#[derive(Debug)]
pub struct StderrPause(());

impl StderrPause {
    pub fn new() -> Self {
        STDERR_PAUSED.store(true, Ordering::Relaxed);
        StderrPause(())
    }
}

impl Default for StderrPause {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrPause {
    fn drop(&mut self) {
        STDERR_PAUSED.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directives_win_over_default() {
        assert_eq!(
            log_filter(Some("bubbletty=debug")).to_string(),
            "bubbletty=debug"
        );
        assert_eq!(
            log_filter(Some("bubbletty=trace")).to_string(),
            "bubbletty=trace"
        );
    }

    #[test]
    fn test_default_filter_when_unset_or_blank() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_pause_guard_restores_stderr() {
        {
            let _pause = StderrPause::new();
            assert!(is_stderr_paused());
        }
        assert!(!is_stderr_paused());
    }
}
