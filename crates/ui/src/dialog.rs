//! Native failure dialog
//!
//! Uses the `rfd` crate's async message dialog: an error-level, OK-only
//! modal box. The returned future resolves once the user dismisses it.
//! On Linux the box is drawn by `zenity`; when that is unavailable rfd
//! returns `Cancel` without showing anything, and the notice goes to stderr.

use fightai_core::{FailureNotice, FailureReporter};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::console::ConsoleReporter;

/// Shows failures in a modal message box
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogReporter;

impl DialogReporter {
    /// Create a dialog reporter
    pub fn new() -> Self {
        Self
    }

    /// Configure the dialog for `notice` without showing it
    pub fn build(notice: &FailureNotice) -> AsyncMessageDialog {
        AsyncMessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(notice.title.as_str())
            .set_description(notice.body())
            .set_buttons(MessageButtons::Ok)
    }

    /// Whether the user acknowledged the dialog
    ///
    /// The only button is OK, so any other result means the box never
    /// reached the screen.
    pub fn acknowledged(result: &MessageDialogResult) -> bool {
        matches!(result, MessageDialogResult::Ok)
    }
}

impl FailureReporter for DialogReporter {
    async fn report(&self, notice: &FailureNotice) {
        tracing::debug!(title = %notice.title, "showing failure dialog");
        let result = Self::build(notice).show().await;
        tracing::debug!(?result, "failure dialog closed");

        if !Self::acknowledged(&result) {
            tracing::warn!(?result, "failure dialog was not shown, writing to stderr");
            eprintln!("{}", ConsoleReporter::render(notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ok_counts_as_acknowledged() {
        assert!(DialogReporter::acknowledged(&MessageDialogResult::Ok));
        assert!(!DialogReporter::acknowledged(&MessageDialogResult::Cancel));
        assert!(!DialogReporter::acknowledged(&MessageDialogResult::No));
        assert!(!DialogReporter::acknowledged(
            &MessageDialogResult::Custom("Close".to_string())
        ));
    }
}
