//! Shared value types for the launcher
//!
//! [`FailureNotice`] is the one piece of data that flows from the launch
//! state machine to whatever surface shows failures to the user.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::LauncherError;
use crate::layout::DIALOG_TITLE;

// ============================================================================
// Failure Kind
// ============================================================================

/// The two kinds of terminal failure a launch can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The bundled interpreter is absent
    EnvironmentMissing,
    /// The interpreter could not be started, or it exited non-zero
    LaunchFailure,
}

impl FailureKind {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureKind::EnvironmentMissing => "Environment missing",
            FailureKind::LaunchFailure => "Launch failure",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Failure Notice
// ============================================================================

/// Everything the user is told about a failed launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    /// Window title
    pub title: String,
    /// Short message ("Python runtime not found.")
    pub message: String,
    /// Detail line (expected path, OS error text, or exit code)
    pub detail: String,
    /// Path of this run's log file
    pub log_path: PathBuf,
    /// Failure classification
    pub kind: FailureKind,
    /// Exit status the launcher returns after reporting
    pub exit_code: i32,
}

impl FailureNotice {
    /// Build the notice for `error`, pointing at `log_path`
    pub fn from_error(error: &LauncherError, log_path: &Path) -> Self {
        Self {
            title: DIALOG_TITLE.to_string(),
            message: error.user_message().to_string(),
            detail: error.detail(),
            log_path: log_path.to_path_buf(),
            kind: error.kind(),
            exit_code: error.exit_code(),
        }
    }

    /// Text shown in the body of the dialog or on the console
    pub fn body(&self) -> String {
        format!(
            "{}\n{}\nLog: {}",
            self.message,
            self.detail,
            self.log_path.display()
        )
    }
}
