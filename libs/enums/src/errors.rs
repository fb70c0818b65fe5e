//! Error types for enum declaration, lookup and comparison
//!
//! Every failure is surfaced synchronously to the immediate caller. Lookups are
//! deterministic, so none of these errors is worth retrying: the same input
//! yields the same error until the declaration itself changes.

use thiserror::Error;

/// Errors produced while building or querying an enum registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// Lookup by a name that is not a member of the enum type
    #[error("Undefined enum name for \"{type_name}\": \"{name}\".")]
    UndefinedName { type_name: String, name: String },

    /// Lookup by an ordinal that no member of the enum type carries
    #[error("Undefined enum ordinal for \"{type_name}\": \"{ordinal}\".")]
    UndefinedOrdinal { type_name: String, ordinal: i64 },

    /// Declared constant name is not an eligible member name (reject policy only)
    #[error("Enum name is invalid: \"{name}\".")]
    InvalidMemberName { name: String },

    /// Explicit ordinal did not increase under the strict ordinal policy
    #[error("Last ordinal value \"{last}\" is greater or equal then current \"{current}\".")]
    OrdinalNotIncreasing { last: i64, current: i64 },

    /// Auto-assigned ordinal would not fit in an i64
    #[error("Ordinal overflow: cannot auto-assign an ordinal after {last}")]
    OrdinalOverflow { last: i64 },

    /// Same member name declared twice within one enum type
    #[error("Duplicate enum name for \"{type_name}\": \"{name}\".")]
    DuplicateName { type_name: String, name: String },

    /// Member accessor invoked with arguments
    #[error("Enum instantiation methods do not accept arguments (got {count}).")]
    ArgumentsNotEmpty { count: usize },

    /// Member accessor invoked with a name that is not a member-name pattern at all
    #[error("Method not found in \"{type_name}\": \"{name}\".")]
    MethodNotFound { type_name: String, name: String },

    /// Ordering comparison across two different enum types
    #[error("Enums of different types cannot be compared: \"{left}\" and \"{right}\".")]
    TypeMismatch { left: String, right: String },

    /// Serialized record names a member whose ordinal differs from the declared one
    #[error("Enum record mismatch for \"{type_name}\": \"{name}\" is declared as {declared}, record says {recorded}.")]
    RecordMismatch {
        type_name: String,
        name: String,
        declared: i64,
        recorded: i64,
    },

    /// Configuration value out of range or unparseable
    #[error("Invalid enum configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EnumError>;

#[cfg(feature = "serialization")]
impl From<serde_json::Error> for EnumError {
    fn from(err: serde_json::Error) -> Self {
        EnumError::Serialization(err.to_string())
    }
}
