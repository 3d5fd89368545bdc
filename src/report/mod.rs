//! Assertion reporting
//!
//! The poller never returns failure to its caller; it surfaces failures
//! through an [`AssertionReporter`], the host framework's `ok(passed, msg)`
//! as an interface. One report per failure event (budget exhaustion,
//! predicate error) and none on success.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info};

/// Sink for assertion outcomes.
///
/// Implement this over whatever the host test framework uses to record
/// pass/fail results.
pub trait AssertionReporter {
    fn report(&self, passed: bool, message: &str);
}

impl<T: AssertionReporter + ?Sized> AssertionReporter for &T {
    fn report(&self, passed: bool, message: &str) {
        (**self).report(passed, message);
    }
}

impl<T: AssertionReporter + ?Sized> AssertionReporter for Arc<T> {
    fn report(&self, passed: bool, message: &str) {
        (**self).report(passed, message);
    }
}

/// Reporter that routes assertion outcomes through `tracing`, so harness
/// failures land in the same subscriber as the rest of a suite's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl AssertionReporter for TracingReporter {
    fn report(&self, passed: bool, message: &str) {
        if passed {
            info!(target: "widget_test_harness::report", "ok: {message}");
        } else {
            error!(target: "widget_test_harness::report", "not ok: {message}");
        }
    }
}

/// One captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub passed: bool,
    pub message: String,
}

/// Reporter that captures every report for later inspection.
///
/// Cheaply clonable; clones share the same log. Suites assert on the call
/// log to distinguish success from failure, since the continuation itself
/// carries no outcome.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports so far, in order.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    pub fn failure_count(&self) -> usize {
        self.reports.lock().iter().filter(|r| !r.passed).count()
    }
}

impl AssertionReporter for RecordingReporter {
    fn report(&self, passed: bool, message: &str) {
        self.reports.lock().push(Report {
            passed,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_reporter_clones_share_the_log() {
        let reporter = RecordingReporter::new();
        let clone = reporter.clone();

        clone.report(false, "first");
        reporter.report(true, "second");

        let reports = reporter.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0], Report { passed: false, message: "first".into() });
        assert_eq!(reporter.failure_count(), 1);
    }
}
