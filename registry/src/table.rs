//! Frozen enum tables.

use frost_core::{EnumError, EnumResult, Key, Members, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Result of a reverse lookup from value to key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// No key maps to the value.
    NotFound,
    /// Exactly one key maps to the value.
    One(Key),
    /// Several keys map to the value, in sorted order.
    Many(Vec<Key>),
}

impl KeyMatch {
    fn from_keys(mut keys: Vec<Key>) -> Self {
        match keys.len() {
            0 => KeyMatch::NotFound,
            1 => KeyMatch::One(keys.remove(0)),
            _ => {
                keys.sort();
                KeyMatch::Many(keys)
            }
        }
    }

    /// Returns true if at least one key matched.
    pub fn is_found(&self) -> bool {
        !matches!(self, KeyMatch::NotFound)
    }

    /// Number of matching keys.
    pub fn count(&self) -> usize {
        match self {
            KeyMatch::NotFound => 0,
            KeyMatch::One(_) => 1,
            KeyMatch::Many(keys) => keys.len(),
        }
    }

    /// Get the key if exactly one matched.
    pub fn as_one(&self) -> Option<&Key> {
        match self {
            KeyMatch::One(key) => Some(key),
            _ => None,
        }
    }

    /// Flatten into a list of keys.
    pub fn into_keys(self) -> Vec<Key> {
        match self {
            KeyMatch::NotFound => Vec::new(),
            KeyMatch::One(key) => vec![key],
            KeyMatch::Many(keys) => keys,
        }
    }
}

#[derive(Debug)]
struct Frozen {
    name: String,
    entries: HashMap<Key, Value>,
}

/// Read-only handle to one registered enum.
///
/// Handles are cheap to clone and share the same frozen entries. There is no
/// `&mut` access path; [`EnumTable::try_insert`] and [`EnumTable::try_remove`]
/// exist for hosts that forward dynamic writes and always fail.
#[derive(Debug, Clone)]
pub struct EnumTable {
    inner: Arc<Frozen>,
}

impl EnumTable {
    /// Copy `members` into a new frozen table.
    pub(crate) fn freeze(name: &str, members: &Members) -> EnumResult<Self> {
        if members.is_empty() {
            return Err(EnumError::invalid_arguments(
                "members",
                "an enum needs at least one member",
            ));
        }
        if let Some((key, _)) = members.iter().find(|(_, value)| value.is_unordered()) {
            return Err(EnumError::unsupported(format!(
                "{}.{} is NaN, which cannot be compared by value",
                name, key
            )));
        }

        Ok(Self {
            inner: Arc::new(Frozen {
                name: name.to_string(),
                entries: members.clone(),
            }),
        })
    }

    /// Name the enum was registered under.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Always false for a registered enum.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> EnumResult<&Value> {
        let key = key.into();
        self.inner
            .entries
            .get(&key)
            .ok_or_else(|| EnumError::missing_item(self.name(), &key))
    }

    pub(crate) fn lookup(&self, key: &Key) -> Option<&Value> {
        self.inner.entries.get(key)
    }

    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.inner.entries.contains_key(key)
    }

    pub(crate) fn contains_value(&self, value: &Value) -> bool {
        self.inner.entries.values().any(|v| v.equivalent(value))
    }

    /// True iff `key` is present and maps to `value`.
    pub(crate) fn key_has_value(&self, key: &Key, value: &Value) -> bool {
        self.lookup(key).is_some_and(|v| v.equivalent(value))
    }

    /// Find every key that maps to `value`.
    pub(crate) fn key_for_value(&self, value: &Value) -> KeyMatch {
        let keys = self
            .inner
            .entries
            .iter()
            .filter(|(_, v)| v.equivalent(value))
            .map(|(k, _)| k.clone())
            .collect();
        KeyMatch::from_keys(keys)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &Key> {
        self.inner.entries.keys()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.entries.values()
    }

    /// Copy the entries into a new caller-owned map.
    pub(crate) fn to_members(&self) -> Members {
        self.inner.entries.clone()
    }

    /// Rejects assignment of `key`. The table is never modified.
    pub fn try_insert(&self, key: impl Into<Key>, _value: impl Into<Value>) -> EnumResult<()> {
        let key: Key = key.into();
        Err(EnumError::write_attempt(self.name(), key))
    }

    /// Rejects removal of `key`. The table is never modified.
    pub fn try_remove(&self, key: impl Into<Key>) -> EnumResult<Value> {
        let key: Key = key.into();
        Err(EnumError::write_attempt(self.name(), key))
    }

    /// Returns true if both handles point at the same registered table.
    pub fn ptr_eq(a: &EnumTable, b: &EnumTable) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}
