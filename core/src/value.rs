//! Value types for FROST enum members.
//!
//! Values are the constants stored under each key of an enum table.
//! Only immutable scalars are supported: Bool, Int, Float and String.

use crate::Key;
use std::collections::HashMap;
use std::fmt;

/// A constant stored in an enum table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

impl Value {
    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Equality used for lookups by value.
    ///
    /// Int and Float compare numerically, so `Int(1)` matches `Float(1.0)`.
    /// Other variants only match their own kind.
    pub fn equivalent(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                *i as f64 == *f
            }
            _ => self == other,
        }
    }

    /// Returns true if this value can never compare equal to itself.
    ///
    /// Only `Float(NaN)` qualifies; such values cannot be found again by
    /// value, so enum tables refuse to store them.
    pub fn is_unordered(&self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Key -> value mapping handed to and returned from the registry.
pub type Members = HashMap<Key, Value>;

/// Helper macro to create member maps.
///
/// ```
/// use frost_core::{members, Key, Value};
///
/// let status = members! { "Active" => 1, "Inactive" => 0 };
/// assert_eq!(status.get(&Key::from("Active")), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! members {
    () => {
        $crate::Members::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Members::new();
            $(
                map.insert($crate::Key::from($key), $crate::Value::from($value));
            )+
            map
        }
    };
}
