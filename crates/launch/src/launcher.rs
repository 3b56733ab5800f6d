//! The launch flow
//!
//! ```text
//! Init → PrepareDirs → PreflightCheck ─┬─ missing ──────────────→ report, exit 1
//!                                      └─ Spawn ─┬─ failed ─────→ report, exit 1
//!                                                └─ Running → Exited → WriteLog ─┬─ non-zero → report, exit code
//!                                                                                └─ zero ────→ exit 0
//! ```
//!
//! Every failure goes through [`report_failure`], which writes the log and
//! hands a [`FailureNotice`] to the configured [`FailureReporter`].

use std::ffi::OsString;

use chrono::Local;
use fightai_core::{
    EnvironmentOverlay, FailureNotice, FailureReporter, LaunchConfig, LauncherError,
    LauncherResult, LogRecord,
};

use crate::process;

/// Runs the bundled interpreter once and reports how it went
pub struct Launcher<R> {
    config: LaunchConfig,
    reporter: R,
    overlay: EnvironmentOverlay,
}

impl<R: FailureReporter> Launcher<R> {
    /// Create a launcher that inherits this process's `PATH`
    pub fn new(config: LaunchConfig, reporter: R) -> Self {
        let overlay = EnvironmentOverlay::from_process(&config);
        Self {
            config,
            reporter,
            overlay,
        }
    }

    /// Use `path` instead of this process's `PATH` as the inherited value
    pub fn with_inherited_path(mut self, path: Option<OsString>) -> Self {
        self.overlay = EnvironmentOverlay::for_config(&self.config, path.as_deref());
        self
    }

    /// Run one launch to completion and return the process exit status
    pub async fn run(&self) -> i32 {
        let started = Local::now().naive_local();

        let log = match self.prepare_log(&started) {
            Ok(log) => log,
            Err(err) => {
                let planned = LogRecord::planned(&self.config.logs_dir, &started);
                return report_failure(&self.reporter, &err, &planned).await;
            }
        };

        match self.launch(&log).await {
            Ok(()) => 0,
            Err(err) => report_failure(&self.reporter, &err, &log).await,
        }
    }

    fn prepare_log(&self, started: &chrono::NaiveDateTime) -> LauncherResult<LogRecord> {
        self.config.ensure_dirs()?;
        LogRecord::create(&self.config.logs_dir, started)
    }

    async fn launch(&self, log: &LogRecord) -> LauncherResult<()> {
        if !self.config.interpreter_present() {
            return Err(LauncherError::RuntimeMissing {
                expected: self.config.interpreter.clone(),
            });
        }

        let exit = process::spawn(&self.config, &self.overlay)?.wait().await?;

        if let Err(e) = log.write(&exit.output.to_log_text()) {
            tracing::error!(error = %e, "unable to save interpreter output");
        }

        if exit.success() {
            Ok(())
        } else {
            Err(LauncherError::ChildFailed { code: exit.code })
        }
    }
}

/// Write `err` to the log, show it through `reporter`, and return the exit code
///
/// The log receives the error detail, except when a child ran and failed: its
/// captured output is already in the log and is kept.
pub async fn report_failure<R: FailureReporter>(
    reporter: &R,
    err: &LauncherError,
    log: &LogRecord,
) -> i32 {
    if !matches!(err, LauncherError::ChildFailed { .. }) {
        if let Err(e) = log.write_detail(&err.detail()) {
            tracing::error!(error = %e, "unable to write failure detail to log");
        }
    }

    let notice = FailureNotice::from_error(err, log.path());
    tracing::error!(
        kind = %notice.kind,
        exit_code = notice.exit_code,
        log = %notice.log_path.display(),
        detail = %notice.detail,
        "{}",
        notice.message
    );
    reporter.report(&notice).await;
    notice.exit_code
}

// ============================================================================
// Tests
// ============================================================================
