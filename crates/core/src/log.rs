//! Per-run launcher log file
//!
//! Each launch owns exactly one file named after its start time. The name is
//! reserved with an exclusive create, so a second launch in the same second
//! gets a numbered suffix instead of overwriting the first log.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{LauncherError, LauncherResult};
use crate::layout::{LINE_ENDING, LOG_EXTENSION, LOG_PREFIX, LOG_TIMESTAMP_FORMAT};

/// The log file of one launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    path: PathBuf,
}

impl LogRecord {
    /// File name for a launch started at `started`
    ///
    /// `attempt` 0 is the plain name; later attempts append `-<attempt>`.
    pub fn file_name(started: &NaiveDateTime, attempt: u32) -> String {
        let stamp = started.format(LOG_TIMESTAMP_FORMAT);
        if attempt == 0 {
            format!("{LOG_PREFIX}{stamp}.{LOG_EXTENSION}")
        } else {
            format!("{LOG_PREFIX}{stamp}-{attempt}.{LOG_EXTENSION}")
        }
    }

    /// Path the log would have without reserving it
    ///
    /// Used when the log directory itself cannot be created, so the failure
    /// report can still name where the log was meant to go.
    pub fn planned(logs_dir: &Path, started: &NaiveDateTime) -> Self {
        Self {
            path: logs_dir.join(Self::file_name(started, 0)),
        }
    }

    /// [`LogRecord::planned`] stamped with the current local time
    pub fn planned_now(logs_dir: &Path) -> Self {
        Self::planned(logs_dir, &Local::now().naive_local())
    }

    /// Reserve a fresh, empty log file in `logs_dir`
    pub fn create(logs_dir: &Path, started: &NaiveDateTime) -> LauncherResult<Self> {
        std::fs::create_dir_all(logs_dir)
            .map_err(|e| LauncherError::directory_create(logs_dir, e))?;

        let mut attempt = 0;
        loop {
            let path = logs_dir.join(Self::file_name(started, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "reserved log file");
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(LauncherError::log_write(path, e)),
            }
        }
    }

    /// Location of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the log's content with `content`
    pub fn write(&self, content: &str) -> LauncherResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| LauncherError::directory_create(dir, e))?;
        }
        std::fs::write(&self.path, content)
            .map_err(|e| LauncherError::log_write(self.path.as_path(), e))?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "wrote log");
        Ok(())
    }

    /// Replace the log's content with a single newline-terminated detail
    pub fn write_detail(&self, detail: &str) -> LauncherResult<()> {
        self.write(&format!("{detail}{LINE_ENDING}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn started() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(
            LogRecord::file_name(&started(), 0),
            "launcher-20261019-090507.log"
        );
        assert_eq!(
            LogRecord::file_name(&started(), 2),
            "launcher-20261019-090507-2.log"
        );
    }

    #[test]
    fn test_create_reserves_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let logs = temp_dir.path().join("FightAI_Data").join("logs");

        let record = LogRecord::create(&logs, &started()).unwrap();
        assert_eq!(record.path(), logs.join("launcher-20261019-090507.log"));
        assert_eq!(std::fs::read_to_string(record.path()).unwrap(), "");
    }

    #[test]
    fn test_same_second_launches_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();

        let first = LogRecord::create(temp_dir.path(), &started()).unwrap();
        let second = LogRecord::create(temp_dir.path(), &started()).unwrap();
        let third = LogRecord::create(temp_dir.path(), &started()).unwrap();

        assert_ne!(first.path(), second.path());
        assert_ne!(second.path(), third.path());
        assert!(second.path().ends_with("launcher-20261019-090507-1.log"));
        assert!(third.path().ends_with("launcher-20261019-090507-2.log"));
    }

    #[test]
    fn test_current_time_twice_gives_distinct_names() {
        let temp_dir = TempDir::new().unwrap();

        let first = LogRecord::create(temp_dir.path(), &Local::now().naive_local()).unwrap();
        let second = LogRecord::create(temp_dir.path(), &Local::now().naive_local()).unwrap();
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let record = LogRecord::create(temp_dir.path(), &started()).unwrap();

        record.write("partial output\n").unwrap();
        record.write_detail("Expected runtime at: /x").unwrap();

        let content = std::fs::read_to_string(record.path()).unwrap();
        assert_eq!(content, format!("Expected runtime at: /x{LINE_ENDING}"));
    }

    #[test]
    fn test_write_recreates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logs = temp_dir.path().join("logs");
        let record = LogRecord::planned(&logs, &started());

        assert!(!logs.exists());
        record.write_detail("detail").unwrap();
        assert!(record.path().is_file());
    }
}
