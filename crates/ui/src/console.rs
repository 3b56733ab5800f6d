//! Console fallback for hosts without a graphical session

use fightai_core::{FailureNotice, FailureReporter};

/// Writes failures to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a console reporter
    pub fn new() -> Self {
        Self
    }

    /// Text written for `notice`: the dialog's title and body
    pub fn render(notice: &FailureNotice) -> String {
        format!("{}: {}", notice.title, notice.body())
    }
}

impl FailureReporter for ConsoleReporter {
    async fn report(&self, notice: &FailureNotice) {
        eprintln!("{}", Self::render(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fightai_core::LauncherError;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_render_matches_dialog_content() {
        let err = LauncherError::RuntimeMissing {
            expected: PathBuf::from("/opt/FightAI/runtime/python/bin/python3"),
        };
        let notice = FailureNotice::from_error(&err, Path::new("/opt/FightAI/logs/launcher.log"));

        assert_eq!(
            ConsoleReporter::render(&notice),
            "FightAI Launcher: Python runtime not found.\n\
             Expected runtime at: /opt/FightAI/runtime/python/bin/python3\n\
             Log: /opt/FightAI/logs/launcher.log"
        );
    }

    #[tokio::test]
    async fn test_report_returns() {
        let notice = FailureNotice::from_error(
            &LauncherError::ChildFailed { code: 7 },
            Path::new("launcher.log"),
        );
        ConsoleReporter::new().report(&notice).await;
    }
}
