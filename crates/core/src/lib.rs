//! # FightAI Core
//!
//! Core types, paths, and error handling for the FightAI launcher.
//!
//! This crate provides the pieces the launch flow is assembled from:
//!
//! - **Layout**: the fixed install layout and [`LaunchConfig`] derived from it
//! - **Environment**: the variable overlay applied to the child interpreter
//! - **Log**: the per-run [`LogRecord`]
//! - **Errors**: [`LauncherError`] and [`LauncherResult`]
//! - **Traits**: [`FailureReporter`], implemented by every failure surface
//!

pub mod config;
pub mod environment;
pub mod error;
pub mod layout;
pub mod log;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::LaunchConfig;
pub use environment::EnvironmentOverlay;
pub use error::{LauncherError, LauncherResult};
pub use log::LogRecord;
pub use traits::FailureReporter;
pub use types::{FailureKind, FailureNotice};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
