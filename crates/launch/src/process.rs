//! Spawning the bundled interpreter
//!
//! The interpreter is started directly (no shell) with `-m <entry module>`,
//! the base directory as its working directory, and both output streams
//! piped into an [`OutputCollector`].

use std::process::{ExitStatus, Stdio};

use fightai_core::layout::ENTRY_MODULE;
use fightai_core::{EnvironmentOverlay, LaunchConfig, LauncherError, LauncherResult};
use tokio::process::{Child, Command};

use crate::capture::{CapturedOutput, OutputCollector, StreamSource};

/// Arguments passed to the interpreter
pub fn entry_args() -> [&'static str; 2] {
    ["-m", ENTRY_MODULE]
}

/// Build the interpreter command for `config` with `overlay` applied
pub fn build_command(config: &LaunchConfig, overlay: &EnvironmentOverlay) -> Command {
    let mut command = Command::new(&config.interpreter);
    command
        .args(entry_args())
        .current_dir(config.working_dir())
        .envs(overlay.iter())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    configure_child_process(&mut command);
    command
}

#[cfg(windows)]
fn configure_child_process(command: &mut Command) {
    const CREATE_NO_WINDOW: u32 = 0x08000000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn configure_child_process(_command: &mut Command) {}

// ============================================================================
// Running Child
// ============================================================================

/// A started interpreter whose output is being captured
pub struct RunningChild {
    child: Child,
    collector: OutputCollector,
}

/// How the interpreter finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildExit {
    /// Exit code; `1` when the process ended without one
    pub code: i32,
    /// Everything it wrote to stdout and stderr
    pub output: CapturedOutput,
}

impl ChildExit {
    /// Whether the child exited with status zero
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Start the interpreter and begin reading both output streams
pub fn spawn(config: &LaunchConfig, overlay: &EnvironmentOverlay) -> LauncherResult<RunningChild> {
    let mut child = build_command(config, overlay)
        .spawn()
        .map_err(|e| LauncherError::spawn(config.interpreter.as_path(), e))?;

    tracing::info!(
        program = %config.interpreter.display(),
        cwd = %config.working_dir().display(),
        pid = child.id(),
        "started interpreter"
    );

    let mut collector = OutputCollector::new();
    if let Some(stdout) = child.stdout.take() {
        collector.attach(stdout, StreamSource::Stdout);
    }
    if let Some(stderr) = child.stderr.take() {
        collector.attach(stderr, StreamSource::Stderr);
    }

    Ok(RunningChild { child, collector })
}

impl RunningChild {
    /// Wait, without a timeout, for the child to exit and its output to drain
    pub async fn wait(mut self) -> LauncherResult<ChildExit> {
        let status = self.child.wait().await.map_err(LauncherError::Wait)?;
        let output = self.collector.finish().await;
        let code = exit_code(status);

        tracing::info!(code, lines = output.len(), "interpreter exited");
        Ok(ChildExit { code, output })
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::process::ExitStatusExt;
                tracing::warn!(signal = status.signal(), "interpreter terminated by signal");
            }
            1
        }
    }
}
