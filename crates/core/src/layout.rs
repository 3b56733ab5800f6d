//! Fixed names that make up the installed FightAI layout
//!
//! The launcher has no configuration file; these constants are the whole of
//! its configuration.

/// Directory under the base directory holding bundled runtimes
pub const RUNTIME_DIR: &str = "runtime";

/// Directory under [`RUNTIME_DIR`] holding the Python installation
pub const PYTHON_DIR: &str = "python";

/// Interpreter location relative to the Python installation
#[cfg(windows)]
pub const INTERPRETER: &[&str] = &["python.exe"];

/// Interpreter location relative to the Python installation
///
/// The `PATH` prefix is always the runtime root, not this file's directory.
#[cfg(not(windows))]
pub const INTERPRETER: &[&str] = &["bin", "python3"];

/// Directory under the base directory holding the application packages
pub const APP_DIR: &str = "app";

/// Per-install data directory under the base directory
pub const DATA_DIR: &str = "FightAI_Data";

/// Log directory under [`DATA_DIR`]
pub const LOGS_DIR: &str = "logs";

/// Module the interpreter runs as its entry point
pub const ENTRY_MODULE: &str = "gso_app.entrypoint";

/// Prefix of every launcher log file name
pub const LOG_PREFIX: &str = "launcher-";

/// Extension of launcher log files
pub const LOG_EXTENSION: &str = "log";

/// chrono format of the timestamp embedded in log file names
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Title of the failure dialog
pub const DIALOG_TITLE: &str = "FightAI Launcher";

/// Line ending used when writing the log
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line ending used when writing the log
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
