//! RegistryBuilder for constructing an EnumRegistry.

use crate::{EnumRegistry, RegistryConfig, Reporter, TracingReporter};
use frost_core::{EnumResult, Members};
use std::sync::Arc;

/// Builder for an [`EnumRegistry`], optionally seeded with enums.
#[derive(Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    reporter: Option<Arc<dyn Reporter>>,
    /// Enums registered by `build`, in insertion order.
    seeds: Vec<(String, Members)>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the reporter that receives failures. Defaults to [`TracingReporter`].
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Register an enum when the registry is built.
    pub fn with_enum(mut self, enum_name: impl Into<String>, members: Members) -> Self {
        self.seeds.push((enum_name.into(), members));
        self
    }

    /// Build the registry and register every seeded enum.
    ///
    /// Seeds go through [`EnumRegistry::create`], so they are validated and
    /// reported exactly like later registrations. The first failure aborts.
    pub fn build(self) -> EnumResult<EnumRegistry> {
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(TracingReporter));
        let registry = EnumRegistry::from_parts(self.config, reporter);

        for (enum_name, members) in &self.seeds {
            registry.create(enum_name, members)?;
        }

        Ok(registry)
    }
}
