//! The EnumRegistry - named frozen enums and the accessors over them.

use crate::{EnumTable, KeyMatch, RegistryBuilder, RegistryConfig, Report, Reporter, TracingReporter};
use frost_core::{EnumError, EnumResult, Key, Members, Severity, Value};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The EnumRegistry maps enum names to frozen tables.
///
/// Entries are only ever added, through [`EnumRegistry::create`]. Every other
/// operation reads. Failures are passed to the configured [`Reporter`] and
/// then returned to the caller.
pub struct EnumRegistry {
    /// Frozen tables by enum name.
    tables: RwLock<HashMap<String, EnumTable>>,
    /// Receives every failure before it is returned.
    reporter: Arc<dyn Reporter>,
    config: RegistryConfig,
}

impl EnumRegistry {
    /// Create an empty registry that logs failures through `tracing`.
    pub fn new() -> Self {
        Self::from_parts(RegistryConfig::default(), Arc::new(TracingReporter))
    }

    /// Start building a registry with custom config, reporter or seed enums.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(config: RegistryConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            reporter,
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ==================== Creation ====================

    /// Freeze a copy of `members` and register it under `enum_name`.
    ///
    /// Registering a name twice is rejected with `DuplicateEnum`; the first
    /// table stays registered.
    pub fn create(&self, enum_name: &str, members: &Members) -> EnumResult<EnumTable> {
        self.register(enum_name, members)
            .map_err(|error| self.fail(error, "create"))
    }

    fn register(&self, enum_name: &str, members: &Members) -> EnumResult<EnumTable> {
        check_name(enum_name)?;
        let table = EnumTable::freeze(enum_name, members)?;

        // Check and insert under one write lock.
        match self.tables.write().entry(enum_name.to_string()) {
            Entry::Occupied(_) => return Err(EnumError::duplicate_enum(enum_name)),
            Entry::Vacant(slot) => {
                slot.insert(table.clone());
            }
        }

        tracing::debug!(enum_name, members = table.len(), "Registered enum");
        Ok(table)
    }

    // ==================== Lookups ====================

    /// Get the value stored under `key`.
    pub fn get(&self, enum_name: &str, key: impl Into<Key>) -> EnumResult<Value> {
        let key = key.into();
        self.read(enum_name, "get", move |table| table.get(key).cloned())
    }

    /// All values of the enum, in no particular order.
    pub fn get_values(&self, enum_name: &str) -> EnumResult<Vec<Value>> {
        self.read(enum_name, "get_values", |table| {
            Ok(table.values().cloned().collect())
        })
    }

    /// All keys of the enum, in no particular order.
    pub fn get_keys(&self, enum_name: &str) -> EnumResult<Vec<Key>> {
        self.read(enum_name, "get_keys", |table| Ok(table.keys().cloned().collect()))
    }

    /// True iff `key` is a member of the enum.
    pub fn is_enum_member(&self, key: impl Into<Key>, enum_name: &str) -> EnumResult<bool> {
        let key = key.into();
        self.read(enum_name, "is_enum_member", |table| {
            Ok(table.contains_key(&key))
        })
    }

    pub fn has_key(&self, enum_name: &str, key: impl Into<Key>) -> EnumResult<bool> {
        let key = key.into();
        self.read(enum_name, "has_key", |table| Ok(table.contains_key(&key)))
    }

    pub fn has_value(&self, enum_name: &str, value: impl Into<Value>) -> EnumResult<bool> {
        let value = value.into();
        self.read(enum_name, "has_value", |table| {
            Ok(table.contains_value(&value))
        })
    }

    /// Reverse lookup: which key(s) map to `value`.
    pub fn get_key_from_value(
        &self,
        enum_name: &str,
        value: impl Into<Value>,
    ) -> EnumResult<KeyMatch> {
        let value = value.into();
        self.read(enum_name, "get_key_from_value", |table| {
            Ok(table.key_for_value(&value))
        })
    }

    /// Copy the enum into a new map owned by the caller.
    pub fn deep_clone(&self, enum_name: &str) -> EnumResult<Members> {
        self.read(enum_name, "deep_clone", |table| Ok(table.to_members()))
    }

    /// True iff `enum_name` is registered. Never reports.
    pub fn exists(&self, enum_name: &str) -> bool {
        self.tables.read().contains_key(enum_name)
    }

    /// True iff `key` is present and maps to `value`.
    pub fn key_has_value(
        &self,
        enum_name: &str,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> EnumResult<bool> {
        let key = key.into();
        let value = value.into();
        self.read(enum_name, "key_has_value", |table| {
            Ok(table.key_has_value(&key, &value))
        })
    }

    /// Same check as [`EnumRegistry::key_has_value`].
    pub fn value_has_key(
        &self,
        enum_name: &str,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> EnumResult<bool> {
        let key = key.into();
        let value = value.into();
        self.read(enum_name, "value_has_key", |table| {
            Ok(table.key_has_value(&key, &value))
        })
    }

    /// Get the enum handle, or `None` if it cannot be resolved.
    ///
    /// Never fails; problems are reported at warning severity.
    pub fn try_get(&self, enum_name: &str) -> Option<EnumTable> {
        match self.table(enum_name) {
            Ok(table) => Some(table),
            Err(error) => {
                self.emit(&error, Severity::Warn, "try_get");
                None
            }
        }
    }

    // ==================== Internals ====================

    fn table(&self, enum_name: &str) -> EnumResult<EnumTable> {
        check_name(enum_name)?;
        self.tables
            .read()
            .get(enum_name)
            .cloned()
            .ok_or_else(|| EnumError::invalid_enum(enum_name))
    }

    /// Resolve `enum_name` and run `f` on its table, reporting any failure.
    fn read<T>(
        &self,
        enum_name: &str,
        location: &'static str,
        f: impl FnOnce(&EnumTable) -> EnumResult<T>,
    ) -> EnumResult<T> {
        match self.table(enum_name).and_then(|table| f(&table)) {
            Ok(result) => {
                if self.config.log_reads {
                    tracing::trace!(enum_name, location, "Enum read");
                }
                Ok(result)
            }
            Err(error) => Err(self.fail(error, location)),
        }
    }

    fn fail(&self, error: EnumError, location: &'static str) -> EnumError {
        self.emit(&error, error.severity(), location);
        error
    }

    fn emit(&self, error: &EnumError, severity: Severity, location: &'static str) {
        let severity = self.config.effective_severity(severity);
        self.reporter.report(&Report::new(error, severity, location));
    }
}

fn check_name(enum_name: &str) -> EnumResult<()> {
    if enum_name.is_empty() {
        return Err(EnumError::invalid_arguments(
            "enum_name",
            "must be a non-empty string",
        ));
    }
    Ok(())
}

impl Default for EnumRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.read();
        let mut names: Vec<&String> = tables.keys().collect();
        names.sort();
        f.debug_struct("EnumRegistry")
            .field("enums", &names)
            .field("config", &self.config)
            .finish()
    }
}
