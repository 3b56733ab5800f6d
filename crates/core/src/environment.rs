//! Environment overlay for the child interpreter
//!
//! The child inherits the launcher's environment; the overlay is applied on
//! top of it, so every variable here replaces any inherited value.

use std::ffi::{OsStr, OsString};

use crate::config::LaunchConfig;

/// Interpreter home
pub const PYTHONHOME: &str = "PYTHONHOME";
/// Module search path
pub const PYTHONPATH: &str = "PYTHONPATH";
/// Executable search path
pub const PATH: &str = "PATH";
/// Data directory, current name
pub const FIGHTAI_DATA_DIR: &str = "FIGHTAI_DATA_DIR";
/// Data directory, name used by older app builds
pub const GSO_DATA_DIR: &str = "GSO_DATA_DIR";
/// Forces UTF-8 mode in the interpreter
pub const PYTHONUTF8: &str = "PYTHONUTF8";

/// Separator between `PATH` entries
#[cfg(windows)]
pub const PATH_SEPARATOR: &str = ";";

/// Separator between `PATH` entries
#[cfg(not(windows))]
pub const PATH_SEPARATOR: &str = ":";

/// Ordered variable overrides applied to the child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentOverlay {
    vars: Vec<(&'static str, OsString)>,
}

impl EnvironmentOverlay {
    /// Build the overlay for `config`, prefixing `inherited_path` with the
    /// runtime directory
    pub fn for_config(config: &LaunchConfig, inherited_path: Option<&OsStr>) -> Self {
        let data_dir = config.data_dir.clone().into_os_string();

        let vars = vec![
            (PYTHONHOME, config.runtime_dir.clone().into_os_string()),
            (PYTHONPATH, config.app_dir.clone().into_os_string()),
            (PATH, prefixed_path(config, inherited_path)),
            (FIGHTAI_DATA_DIR, data_dir.clone()),
            (GSO_DATA_DIR, data_dir),
            (PYTHONUTF8, OsString::from("1")),
        ];

        Self { vars }
    }

    /// Build the overlay using this process's own `PATH`
    pub fn from_process(config: &LaunchConfig) -> Self {
        let inherited = std::env::var_os(PATH);
        Self::for_config(config, inherited.as_deref())
    }

    /// Value set for `name`, if the overlay sets it
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_os_str())
    }

    /// Iterate over `(name, value)` pairs in application order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OsStr)> + '_ {
        self.vars.iter().map(|(key, value)| (*key, value.as_os_str()))
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

/// Runtime directory first, then the inherited search path unchanged
fn prefixed_path(config: &LaunchConfig, inherited_path: Option<&OsStr>) -> OsString {
    let mut path = config.runtime_dir.clone().into_os_string();
    if let Some(inherited) = inherited_path.filter(|p| !p.is_empty()) {
        path.push(PATH_SEPARATOR);
        path.push(inherited);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> LaunchConfig {
        LaunchConfig::from_base_dir("/opt/FightAI")
    }

    #[test]
    fn test_overlay_sets_all_variables() {
        let config = config();
        let overlay = EnvironmentOverlay::for_config(&config, None);

        assert_eq!(overlay.len(), 6);
        assert_eq!(
            overlay.get(PYTHONHOME),
            Some(config.runtime_dir.as_os_str())
        );
        assert_eq!(overlay.get(PYTHONPATH), Some(config.app_dir.as_os_str()));
        assert_eq!(overlay.get(PYTHONUTF8), Some(OsStr::new("1")));
        assert_eq!(overlay.get("HOME"), None);
    }

    #[test]
    fn test_both_data_variables_point_at_data_dir() {
        let config = config();
        let overlay = EnvironmentOverlay::for_config(&config, None);

        assert_eq!(
            overlay.get(FIGHTAI_DATA_DIR),
            Some(config.data_dir.as_os_str())
        );
        assert_eq!(overlay.get(FIGHTAI_DATA_DIR), overlay.get(GSO_DATA_DIR));
    }

    #[test]
    fn test_path_keeps_inherited_value_after_runtime() {
        let config = config();
        let inherited = format!("/usr/local/bin{PATH_SEPARATOR}/usr/bin");
        let overlay = EnvironmentOverlay::for_config(&config, Some(OsStr::new(&inherited)));

        let path = overlay.get(PATH).unwrap().to_string_lossy().into_owned();
        let runtime = config.runtime_dir.to_string_lossy().into_owned();

        let runtime_at = path.find(&runtime).expect("runtime dir missing from PATH");
        let inherited_at = path.find(&inherited).expect("inherited PATH lost");
        assert!(runtime_at < inherited_at);
        assert_eq!(path, format!("{runtime}{PATH_SEPARATOR}{inherited}"));
    }

    #[test]
    fn test_path_without_inherited_value() {
        let config = config();
        let expected = config.runtime_dir.clone().into_os_string();

        let overlay = EnvironmentOverlay::for_config(&config, None);
        assert_eq!(overlay.get(PATH), Some(expected.as_os_str()));

        let overlay = EnvironmentOverlay::for_config(&config, Some(OsStr::new("")));
        assert_eq!(overlay.get(PATH), Some(expected.as_os_str()));
    }

    #[test]
    fn test_path_prefix_is_runtime_root() {
        let config = config();
        let overlay = EnvironmentOverlay::for_config(&config, None);

        assert_eq!(overlay.get(PATH), overlay.get(PYTHONHOME));
        assert!(config.interpreter.starts_with(&config.runtime_dir));
    }

    #[test]
    fn test_from_process_prefixes_own_path() {
        let config = config();
        let overlay = EnvironmentOverlay::from_process(&config);
        let inherited = std::env::var_os(PATH);

        assert_eq!(
            overlay,
            EnvironmentOverlay::for_config(&config, inherited.as_deref())
        );
        let path = overlay.get(PATH).unwrap().to_string_lossy().into_owned();
        assert!(path.starts_with(&*config.runtime_dir.to_string_lossy()));
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let overlay = EnvironmentOverlay::for_config(&config(), None);
        let names: Vec<_> = overlay.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                PYTHONHOME,
                PYTHONPATH,
                PATH,
                FIGHTAI_DATA_DIR,
                GSO_DATA_DIR,
                PYTHONUTF8
            ]
        );
    }
}
