//! Core traits for the launcher
//!
//! The launch state machine only knows that failures go to *some*
//! [`FailureReporter`]; the native dialog, the console fallback and the test
//! recorder all implement it.

use std::future::Future;

use crate::types::FailureNotice;

// ============================================================================
// FailureReporter Trait
// ============================================================================

/// A surface that shows a failed launch to the user
///
/// `report` returns once the user has acknowledged the notice (for modal
/// surfaces) or once the notice has been written (for non-interactive ones).
///
/// # Example
///
/// ```rust,ignore
/// use fightai_core::{FailureNotice, FailureReporter};
///
/// struct Stderr;
///
/// impl FailureReporter for Stderr {
///     async fn report(&self, notice: &FailureNotice) {
///         eprintln!("{}", notice.body());
///     }
/// }
/// ```
pub trait FailureReporter {
    /// Present `notice` and wait until it has been delivered
    fn report(&self, notice: &FailureNotice) -> impl Future<Output = ()> + Send;
}

impl<R: FailureReporter + Sync> FailureReporter for &R {
    fn report(&self, notice: &FailureNotice) -> impl Future<Output = ()> + Send {
        (**self).report(notice)
    }
}
