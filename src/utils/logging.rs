//! Logging setup
//!
//! All tracing output goes to `pinmap.log` in the configuration directory.
//! Each launch starts a fresh file; earlier sessions are kept as
//! `pinmap.log.1` (previous run) up to `pinmap.log.9`.

use crate::error::{PinMapError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PREFIX: &str = "pinmap";
const LOG_SUFFIX: &str = "log";

/// Number of earlier sessions kept next to the live log
const KEPT_SESSIONS: u8 = 9;

/// Start file logging in `log_dir`
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)?;
    LogHistory::new(log_dir).shift()?;

    // The appender never rolls by itself; sessions are shifted above
    let writer = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(log_dir)
        .map_err(|e| PinMapError::LoggingError(Box::new(e)))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PinMapError::LoggingError(Box::new(e)))
}

/// The live log file and its numbered predecessors
struct LogHistory {
    dir: PathBuf,
}

impl LogHistory {
    fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn live(&self) -> PathBuf {
        self.dir.join(format!("{LOG_PREFIX}.{LOG_SUFFIX}"))
    }

    fn session(&self, n: u8) -> PathBuf {
        self.dir.join(format!("{LOG_PREFIX}.{LOG_SUFFIX}.{n}"))
    }

    /// Age every kept session by one and move the live log to slot 1
    ///
    /// The oldest session falls off the end. Missing slots are skipped, so
    /// gaps in the history move along unchanged.
    fn shift(&self) -> Result<()> {
        let live = self.live();
        if !live.exists() {
            return Ok(());
        }

        let oldest = self.session(KEPT_SESSIONS);
        if oldest.exists() {
            fs::remove_file(oldest)?;
        }

        for n in (1..KEPT_SESSIONS).rev() {
            let from = self.session(n);
            if from.exists() {
                fs::rename(from, self.session(n + 1))?;
            }
        }

        fs::rename(live, self.session(1))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;

    fn contents(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_shift_moves_live_log_to_first_slot() {
        let temp_dir = create_test_dir();
        let history = LogHistory::new(temp_dir.path());
        fs::write(history.live(), "run 1").unwrap();

        history.shift().unwrap();

        assert!(!history.live().exists());
        assert_eq!(contents(&history.session(1)), "run 1");
    }

    #[test]
    fn test_shift_drops_oldest_session() {
        let temp_dir = create_test_dir();
        let history = LogHistory::new(temp_dir.path());

        for run in 1..=12 {
            fs::write(history.live(), format!("run {run}")).unwrap();
            history.shift().unwrap();
        }

        assert!((1..=KEPT_SESSIONS).all(|n| history.session(n).exists()));
        assert!(!history.session(KEPT_SESSIONS + 1).exists());
        assert_eq!(contents(&history.session(1)), "run 12");
        assert_eq!(contents(&history.session(KEPT_SESSIONS)), "run 4");
    }

    #[test]
    fn test_shift_without_live_log_does_nothing() {
        let temp_dir = create_test_dir();
        let history = LogHistory::new(temp_dir.path());

        history.shift().unwrap();

        assert!(!history.session(1).exists());
    }

    #[test]
    fn test_shift_preserves_gaps() {
        let temp_dir = create_test_dir();
        let history = LogHistory::new(temp_dir.path());
        fs::write(history.live(), "current").unwrap();
        fs::write(history.session(1), "previous").unwrap();
        fs::write(history.session(5), "old").unwrap();

        history.shift().unwrap();

        assert_eq!(contents(&history.session(1)), "current");
        assert_eq!(contents(&history.session(2)), "previous");
        assert_eq!(contents(&history.session(6)), "old");
        assert!(!history.session(5).exists());
    }
}
