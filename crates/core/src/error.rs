//! Error types for the FightAI launcher
//!
//! Every way a launch can fail is a variant of [`LauncherError`]. Each variant
//! knows the short message shown to the user, the detail text written to the
//! log, and the exit code the launcher returns for it.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::FailureKind;

/// The main error type for the launcher
#[derive(Debug, Error)]
pub enum LauncherError {
    // ========================================================================
    // Environment Errors
    // ========================================================================
    /// The bundled interpreter binary is not where the layout expects it
    #[error("Expected runtime at: {}", expected.display())]
    RuntimeMissing { expected: PathBuf },

    /// The executable's own directory could not be determined
    #[error("Unable to resolve launcher directory: {0}")]
    BaseDirUnresolved(String),

    // ========================================================================
    // Launch Errors
    // ========================================================================
    /// The operating system refused to start the interpreter
    #[error("Failed to spawn '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child process failed
    #[error("Failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),

    /// The child ran and exited with a non-zero status
    #[error("Exit code: {code}")]
    ChildFailed { code: i32 },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// Directory creation failed
    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be created or written
    #[error("Failed to write log '{}': {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Create a spawn error for `program`
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Create a log write error
    pub fn log_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::LogWrite {
            path: path.into(),
            source,
        }
    }

    /// Which of the two user-facing failure kinds this error belongs to
    pub fn kind(&self) -> FailureKind {
        match self {
            LauncherError::RuntimeMissing { .. } => FailureKind::EnvironmentMissing,
            _ => FailureKind::LaunchFailure,
        }
    }

    /// The exit status the launcher returns for this error
    ///
    /// A failed child passes its own code through; everything else is a
    /// launcher-level failure and maps to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::ChildFailed { code } => *code,
            _ => 1,
        }
    }

    /// Short message for the failure dialog
    pub fn user_message(&self) -> &'static str {
        match self {
            LauncherError::RuntimeMissing { .. } => "Python runtime not found.",
            LauncherError::Spawn { .. } => "Failed to launch FightAI.",
            LauncherError::ChildFailed { .. } => "FightAI exited with an error.",
            LauncherError::Wait(_) => "Lost track of the FightAI process.",
            LauncherError::BaseDirUnresolved(_) => "Unable to locate the FightAI installation.",
            LauncherError::DirectoryCreate { .. }
            | LauncherError::LogWrite { .. }
            | LauncherError::Io(_) => "Failed to prepare the FightAI data directory.",
        }
    }

    /// Raw detail text, written to the log for startup failures
    ///
    /// Includes the chain of underlying causes so the log carries the full
    /// OS error description.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !detail.contains(&text) {
                detail.push_str("\nCaused by: ");
                detail.push_str(&text);
            }
            source = std::error::Error::source(cause);
        }
        detail
    }
}

/// Result type alias using LauncherError
pub type LauncherResult<T> = Result<T, LauncherError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_runtime_missing_names_expected_path() {
        let err = LauncherError::RuntimeMissing {
            expected: PathBuf::from("/opt/fightai/runtime/python/bin/python3"),
        };
        assert_eq!(err.kind(), FailureKind::EnvironmentMissing);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.detail(),
            "Expected runtime at: /opt/fightai/runtime/python/bin/python3"
        );
        assert_eq!(err.user_message(), "Python runtime not found.");
    }

    #[test]
    fn test_child_failure_passes_code_through() {
        let err = LauncherError::ChildFailed { code: 42 };
        assert_eq!(err.kind(), FailureKind::LaunchFailure);
        assert_eq!(err.exit_code(), 42);
        assert_eq!(err.detail(), "Exit code: 42");
    }

    #[test]
    fn test_spawn_error_carries_os_text() {
        let err = LauncherError::spawn(
            "/base/runtime/python/bin/python3",
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert_eq!(err.kind(), FailureKind::LaunchFailure);
        assert_eq!(err.exit_code(), 1);
        let detail = err.detail();
        assert!(detail.contains("/base/runtime/python/bin/python3"));
        assert!(detail.contains("Permission denied"));
        // The source text is already in the message; it is not repeated
        assert_eq!(detail.matches("Permission denied").count(), 1);
    }

    #[test]
    fn test_io_errors_are_launcher_failures() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LauncherError = io_err.into();
        assert_eq!(err.kind(), FailureKind::LaunchFailure);
        assert_eq!(err.exit_code(), 1);

        let err = LauncherError::log_write("/x.log", io::Error::other("disk full"));
        assert_eq!(err.detail(), "Failed to write log '/x.log': disk full");
    }
}
