//! Launch configuration derived from the executable's location
//!
//! [`LaunchConfig::from_base_dir`] is the single place where the install
//! layout is turned into concrete paths. Everything else that needs a path,
//! including the error fallback, reads it from a `LaunchConfig`.

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, LauncherResult};
use crate::layout;

/// Every path one launch works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Directory containing the launcher executable
    pub base_dir: PathBuf,
    /// Bundled Python installation (`PYTHONHOME`)
    pub runtime_dir: PathBuf,
    /// Interpreter binary inside the runtime
    pub interpreter: PathBuf,
    /// Application package root (`PYTHONPATH`)
    pub app_dir: PathBuf,
    /// Per-install data directory
    pub data_dir: PathBuf,
    /// Where launcher logs are written
    pub logs_dir: PathBuf,
}

impl LaunchConfig {
    /// Derive the full layout from a base directory
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let runtime_dir = base_dir.join(layout::RUNTIME_DIR).join(layout::PYTHON_DIR);
        let interpreter = layout::INTERPRETER
            .iter()
            .fold(runtime_dir.clone(), |path, part| path.join(part));
        let app_dir = base_dir.join(layout::APP_DIR);
        let data_dir = base_dir.join(layout::DATA_DIR);
        let logs_dir = data_dir.join(layout::LOGS_DIR);

        Self {
            base_dir,
            runtime_dir,
            interpreter,
            app_dir,
            data_dir,
            logs_dir,
        }
    }

    /// Derive the layout from the directory of the running executable
    pub fn from_current_exe() -> LauncherResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| LauncherError::BaseDirUnresolved(e.to_string()))?;
        let base = exe.parent().ok_or_else(|| {
            LauncherError::BaseDirUnresolved(format!(
                "'{}' has no parent directory",
                exe.display()
            ))
        })?;
        Ok(Self::from_base_dir(base))
    }

    /// Create the data and log directories if they are missing
    pub fn ensure_dirs(&self) -> LauncherResult<()> {
        for dir in [&self.data_dir, &self.logs_dir] {
            std::fs::create_dir_all(dir)
                .map_err(|e| LauncherError::directory_create(dir.as_path(), e))?;
        }
        Ok(())
    }

    /// Whether the interpreter binary is present
    pub fn interpreter_present(&self) -> bool {
        self.interpreter.is_file()
    }

    /// Base directory, used as the child's working directory
    pub fn working_dir(&self) -> &Path {
        &self.base_dir
    }
}
