//! Registry configuration.

use frost_core::Severity;

/// Tunables for an [`EnumRegistry`](crate::EnumRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Report warning-level failures at error severity.
    ///
    /// Only the severity passed to the reporter changes; return values do not.
    pub escalate_warnings: bool,
    /// Emit a `trace` event for every successful read.
    pub log_reads: bool,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report warnings as errors.
    pub fn escalate_warnings(mut self) -> Self {
        self.escalate_warnings = true;
        self
    }

    /// Trace successful reads.
    pub fn log_reads(mut self) -> Self {
        self.log_reads = true;
        self
    }

    /// Severity a failure is reported at under this config.
    pub fn effective_severity(&self, severity: Severity) -> Severity {
        if self.escalate_warnings {
            Severity::Error
        } else {
            severity
        }
    }
}
