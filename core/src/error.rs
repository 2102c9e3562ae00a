//! Error types for FROST.

use std::fmt;
use thiserror::Error;

/// Kind of a failure, independent of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Referenced enum name is not registered.
    InvalidEnum,
    /// Referenced key is not present in a registered enum.
    MissingItem,
    /// Caller passed an argument of the wrong shape.
    InvalidArguments,
    /// Attempted to register an already-used name.
    DuplicateEnum,
    /// Attempted to mutate a frozen enum.
    WriteAttempt,
    /// An operation hit a case the registry cannot handle.
    Unsupported,
}

impl ErrorKind {
    /// Stable name of this kind, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEnum => "InvalidEnum",
            ErrorKind::MissingItem => "MissingItem",
            ErrorKind::InvalidArguments => "InvalidArguments",
            ErrorKind::DuplicateEnum => "DuplicateEnum",
            ErrorKind::WriteAttempt => "WriteAttempt",
            ErrorKind::Unsupported => "Unsupported",
        }
    }

    /// Default severity for failures of this kind.
    ///
    /// A rejected duplicate registration leaves the existing enum intact, so
    /// it is recoverable. Everything else halts the offending call path.
    pub fn default_severity(&self) -> Severity {
        match self {
            ErrorKind::DuplicateEnum => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Recoverable - informational only.
    Warn,
    /// Fatal for the offending call path.
    Error,
}

impl Severity {
    /// Check if this severity should halt the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when creating or reading enums.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumError {
    /// Enum name not registered.
    #[error("Enum not registered: {name}")]
    InvalidEnum { name: String },

    /// Key not present in the enum.
    #[error("Enum {enum_name} has no item {key}")]
    MissingItem { enum_name: String, key: String },

    /// Argument has the wrong shape.
    #[error("Invalid argument `{param}`: {reason}")]
    InvalidArguments { param: &'static str, reason: String },

    /// Name already registered.
    #[error("Enum already registered: {name}")]
    DuplicateEnum { name: String },

    /// Write through a frozen handle.
    #[error("Cannot write {key} on frozen enum {enum_name}")]
    WriteAttempt { enum_name: String, key: String },

    /// Unsupported input or operation.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl EnumError {
    pub fn invalid_enum(name: impl Into<String>) -> Self {
        EnumError::InvalidEnum { name: name.into() }
    }

    pub fn missing_item(enum_name: impl Into<String>, key: impl fmt::Display) -> Self {
        EnumError::MissingItem {
            enum_name: enum_name.into(),
            key: key.to_string(),
        }
    }

    pub fn invalid_arguments(param: &'static str, reason: impl Into<String>) -> Self {
        EnumError::InvalidArguments {
            param,
            reason: reason.into(),
        }
    }

    pub fn duplicate_enum(name: impl Into<String>) -> Self {
        EnumError::DuplicateEnum { name: name.into() }
    }

    pub fn write_attempt(enum_name: impl Into<String>, key: impl fmt::Display) -> Self {
        EnumError::WriteAttempt {
            enum_name: enum_name.into(),
            key: key.to_string(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        EnumError::Unsupported(message.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::InvalidEnum { .. } => ErrorKind::InvalidEnum,
            EnumError::MissingItem { .. } => ErrorKind::MissingItem,
            EnumError::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            EnumError::DuplicateEnum { .. } => ErrorKind::DuplicateEnum,
            EnumError::WriteAttempt { .. } => ErrorKind::WriteAttempt,
            EnumError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }

    /// The default severity of this error.
    pub fn severity(&self) -> Severity {
        self.kind().default_severity()
    }

    /// Check if this error should halt the caller.
    pub fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }
}

/// Result type for enum operations.
pub type EnumResult<T> = Result<T, EnumError>;
