//! Member name eligibility
//!
//! A declared constant becomes an enum member only if its name is written in
//! upper case (letters, digits and underscores) and starts with an uppercase
//! letter. Anything else is treated as an internal or reserved constant.

use crate::config::NamePolicy;
use crate::errors::{EnumError, Result};

/// Prefix marking internal constants that are never members
pub const INTERNAL_NAME_PREFIX: &str = "__";

/// Check whether `name` is an eligible member name
///
/// # Examples
///
/// ```rust
/// use enums::is_valid_member_name;
///
/// assert!(is_valid_member_name("VALID_CONSTANT_NAME"));
/// assert!(!is_valid_member_name("_INVALID_CONSTANT_NAME"));
/// assert!(!is_valid_member_name("iNVALID_CONSTANT_NAME"));
/// assert!(!is_valid_member_name("0INVALID_CONSTANT_NAME"));
/// ```
pub fn is_valid_member_name(name: &str) -> bool {
    is_upper_case_name(name) && starts_with_uppercase_letter(name)
}

/// Check whether `name` follows the internal-constant convention
pub fn is_internal_name(name: &str) -> bool {
    name.starts_with(INTERNAL_NAME_PREFIX)
}

fn is_upper_case_name(name: &str) -> bool {
    !name.chars().any(char::is_lowercase)
}

fn starts_with_uppercase_letter(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Outcome of screening one declared name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVerdict {
    Member,
    Skip,
}

/// Screen a declared name under the given policy
///
/// Under [`NamePolicy::Filter`] every ineligible name is skipped. Under
/// [`NamePolicy::Reject`] internal names are skipped and any other ineligible
/// name is an error.
pub fn screen_name(name: &str, policy: NamePolicy) -> Result<NameVerdict> {
    if is_valid_member_name(name) {
        return Ok(NameVerdict::Member);
    }

    match policy {
        NamePolicy::Filter => Ok(NameVerdict::Skip),
        NamePolicy::Reject if is_internal_name(name) => Ok(NameVerdict::Skip),
        NamePolicy::Reject => Err(EnumError::InvalidMemberName {
            name: name.to_string(),
        }),
    }
}
