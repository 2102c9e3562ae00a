//! Failure reporting.
//!
//! Every failed registry operation is handed to a [`Reporter`] before the
//! error is returned to the caller. The reporter decides how to surface it:
//! [`TracingReporter`] logs it, [`MemoryReporter`] records it for inspection.

use frost_core::{EnumError, ErrorKind, Severity};
use parking_lot::Mutex;

/// A single reported failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Whether the failure halts the offending call path.
    pub severity: Severity,
    /// Operation that detected the failure.
    pub location: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl Report {
    pub fn new(error: &EnumError, severity: Severity, location: &'static str) -> Self {
        Self {
            kind: error.kind(),
            severity,
            location,
            message: error.to_string(),
        }
    }

    /// Check if this is an error-level report.
    pub fn is_error(&self) -> bool {
        self.severity.is_fatal()
    }

    /// Check if this is a warning-level report.
    pub fn is_warning(&self) -> bool {
        !self.severity.is_fatal()
    }
}

/// Receives failures detected by the registry.
pub trait Reporter: Send + Sync {
    fn report(&self, report: &Report);
}

/// Logs reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, report: &Report) {
        match report.severity {
            Severity::Warn => tracing::warn!(
                kind = %report.kind,
                location = report.location,
                "{}",
                report.message
            ),
            Severity::Error => tracing::error!(
                kind = %report.kind,
                location = report.location,
                "{}",
                report.message
            ),
        }
    }
}

/// Collects reports in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports received so far.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Remove and return all reports received so far.
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock())
    }

    /// Most recent report.
    pub fn last(&self) -> Option<Report> {
        self.reports.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Check if any error-level report was received.
    pub fn has_errors(&self) -> bool {
        self.reports.lock().iter().any(Report::is_error)
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, report: &Report) {
        self.reports.lock().push(report.clone());
    }
}
