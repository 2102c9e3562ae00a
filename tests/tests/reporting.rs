//! Reporter and configuration behavior.

use frost_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[test]
fn test_one_report_per_failure() {
    let fx = Fixture::seeded();

    let _ = fx.registry.get("Colors", "Pink");
    let _ = fx.registry.get("Ghost", "Red");
    let _ = fx.registry.has_key("Colors", "Red");

    let reports = fx.reporter.take();
    assert_eq!(reports.len(), 2);
    assert_eq!(
        reports[0],
        Report {
            kind: ErrorKind::MissingItem,
            severity: Severity::Error,
            location: "get",
            message: "Enum Colors has no item Pink".to_string(),
        }
    );
    assert_eq!(reports[1].kind, ErrorKind::InvalidEnum);
}

#[test]
fn test_escalated_warnings() {
    let fx = Fixture::with_config(RegistryConfig::new().escalate_warnings());
    fx.registry.create("Colors", &colors()).unwrap();

    // Duplicate and try_get failures are warnings by default.
    let _ = fx.registry.create("Colors", &colors());
    assert!(fx.registry.try_get("Ghost").is_none());

    let reports = fx.reporter.take();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(Report::is_error));
}

#[test]
fn test_log_reads_does_not_change_results() {
    let fx = Fixture::with_config(RegistryConfig::new().log_reads());
    fx.registry.create("Status", &status()).unwrap();

    assert_eq!(fx.registry.get("Status", "Active"), Ok(Value::Int(1)));
    assert!(fx.reporter.is_empty());
}

/// Reporter that turns every fatal report into a panic, as a strict host would.
struct PanickingReporter;

impl Reporter for PanickingReporter {
    fn report(&self, report: &Report) {
        if report.is_error() {
            panic!("{}: {}", report.location, report.message);
        }
    }
}

#[test]
fn test_custom_reporter_can_escalate() {
    let registry = EnumRegistry::builder()
        .reporter(Arc::new(PanickingReporter))
        .with_enum("Colors", colors())
        .build()
        .unwrap();

    // Warnings pass through.
    assert!(registry.try_get("Ghost").is_none());

    let result = panic::catch_unwind(AssertUnwindSafe(|| registry.get("Colors", "Pink")));
    assert!(result.is_err());
}

#[test]
fn test_default_registry_logs_through_tracing() {
    init_tracing();
    let registry = EnumRegistry::new();

    assert_eq!(
        registry.get("Ghost", "Red").unwrap_err().kind(),
        ErrorKind::InvalidEnum
    );
    assert!(registry.try_get("Ghost").is_none());
}
