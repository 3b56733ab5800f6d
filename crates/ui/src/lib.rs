//! # FightAI UI
//!
//! Failure surfaces for the FightAI launcher.
//!
//! The launcher has exactly one kind of user-facing feedback: a modal error
//! box naming what went wrong and where the log is. Hosts without a
//! graphical session get the same text on stderr instead.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod console;
pub mod dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use console::ConsoleReporter;
pub use dialog::DialogReporter;

use std::ffi::OsString;

use fightai_core::{FailureNotice, FailureReporter};

/// Variables whose presence means a desktop session is running
pub const SESSION_VARS: &[&str] = &["DISPLAY", "WAYLAND_DISPLAY"];

// ============================================================================
// Surface
// ============================================================================

/// Where failures are shown
#[derive(Debug, Clone, Copy)]
pub enum Surface {
    Dialog(DialogReporter),
    Console(ConsoleReporter),
}

impl Surface {
    /// Pick the dialog when the host can show one, the console otherwise
    pub fn detect() -> Self {
        if graphical_session_available() {
            Surface::Dialog(DialogReporter::new())
        } else {
            Surface::Console(ConsoleReporter::new())
        }
    }

    /// Short name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Surface::Dialog(_) => "dialog",
            Surface::Console(_) => "console",
        }
    }
}

impl FailureReporter for Surface {
    async fn report(&self, notice: &FailureNotice) {
        match self {
            Surface::Dialog(dialog) => dialog.report(notice).await,
            Surface::Console(console) => console.report(notice).await,
        }
    }
}

#[cfg(any(windows, target_os = "macos"))]
fn graphical_session_available() -> bool {
    true
}

#[cfg(not(any(windows, target_os = "macos")))]
fn graphical_session_available() -> bool {
    session_advertised(|name| std::env::var_os(name))
}

/// Whether any of [`SESSION_VARS`] is set to a non-empty value
pub fn session_advertised(lookup: impl Fn(&str) -> Option<OsString>) -> bool {
    SESSION_VARS
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.is_empty()))
}

// ============================================================================
// Constants
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_detection() {
        assert!(!session_advertised(|_| None));
        assert!(!session_advertised(|_| Some(OsString::new())));
        assert!(session_advertised(|name| {
            (name == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))
        }));
        assert!(session_advertised(|name| {
            (name == "DISPLAY").then(|| OsString::from(":0"))
        }));
    }

    #[test]
    fn test_surface_names() {
        assert_eq!(Surface::Dialog(DialogReporter::new()).name(), "dialog");
        assert_eq!(Surface::Console(ConsoleReporter::new()).name(), "console");
    }
}
