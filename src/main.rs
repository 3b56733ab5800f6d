//! FightAI Launcher
//!
//! Starts the bundled Python runtime next to this executable, saves its
//! output to a log, and reports failures in a dialog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use fightai_core::{LaunchConfig, LogRecord};
use fightai_launch::{Launcher, report_failure};
use fightai_ui::Surface;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let surface = Surface::detect();

    let code = match LaunchConfig::from_current_exe() {
        Ok(config) => {
            tracing::info!(
                base = %config.base_dir.display(),
                interpreter = %config.interpreter.display(),
                surface = surface.name(),
                "launching FightAI"
            );
            Launcher::new(config, surface).run().await
        }
        Err(err) => {
            // No install layout to log into
            let log = LogRecord::planned_now(&std::env::temp_dir());
            report_failure(&surface, &err, &log).await
        }
    };

    std::process::exit(code);
}
