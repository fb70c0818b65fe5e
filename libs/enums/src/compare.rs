//! Comparison and rendering of enum instances
//!
//! Stateless functions over [`EnumInstance`] handles. Ordering predicates only
//! make sense within one enum type and fail with [`EnumError::TypeMismatch`]
//! otherwise; equality and identity simply return `false` across types.

use crate::errors::{EnumError, Result};
use crate::instance::EnumInstance;
use std::cmp::Ordering;

/// True iff both handles point at the same singleton member
pub fn is_same(one: &EnumInstance, other: &EnumInstance) -> bool {
    one.ptr_eq(other)
}

/// True iff both members belong to the same type and share an ordinal
pub fn is_equal(one: &EnumInstance, other: &EnumInstance) -> bool {
    one.enum_type() == other.enum_type() && one.ordinal() == other.ordinal()
}

/// Fail unless both members belong to the same enum type
pub fn ensure_same_type(one: &EnumInstance, other: &EnumInstance) -> Result<()> {
    if one.enum_type() == other.enum_type() {
        Ok(())
    } else {
        Err(EnumError::TypeMismatch {
            left: one.type_name().to_string(),
            right: other.type_name().to_string(),
        })
    }
}

/// Order two members of the same type by ordinal
pub fn compare(one: &EnumInstance, other: &EnumInstance) -> Result<Ordering> {
    ensure_same_type(one, other)?;
    Ok(one.ordinal().cmp(&other.ordinal()))
}

pub fn is_less(one: &EnumInstance, other: &EnumInstance) -> Result<bool> {
    Ok(compare(one, other)?.is_lt())
}

pub fn is_less_or_equal(one: &EnumInstance, other: &EnumInstance) -> Result<bool> {
    Ok(compare(one, other)?.is_le())
}

pub fn is_greater(one: &EnumInstance, other: &EnumInstance) -> Result<bool> {
    Ok(compare(one, other)?.is_gt())
}

pub fn is_greater_or_equal(one: &EnumInstance, other: &EnumInstance) -> Result<bool> {
    Ok(compare(one, other)?.is_ge())
}

/// Bare member name
pub fn to_string(instance: &EnumInstance) -> String {
    instance.name().to_string()
}

/// Pretty-printed `{"type", "name", "ordinal"}` object with four-space indentation
#[cfg(feature = "serialization")]
pub fn to_json(instance: &EnumInstance) -> Result<String> {
    use serde::Serialize;

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    instance.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| EnumError::Serialization(e.to_string()))
}
