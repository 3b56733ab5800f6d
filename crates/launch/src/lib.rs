//! # FightAI Launch
//!
//! Starts the bundled Python interpreter and follows it to completion.
//!
//! ## Modules
//!
//! - `capture` - line capture from the child's stdout and stderr
//! - `process` - building and spawning the interpreter command
//! - `launcher` - the launch flow and the failure reporting primitive
//!

pub mod capture;
pub mod launcher;
pub mod process;

// Re-export dependencies for use in main.rs
pub use fightai_core;

pub use capture::{CapturedOutput, OutputCollector, StreamSource};
pub use launcher::{Launcher, report_failure};
pub use process::{ChildExit, RunningChild};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
