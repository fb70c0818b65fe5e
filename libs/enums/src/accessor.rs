//! Member accessor dispatch
//!
//! Accessors are zero-argument calls named after a member, such as
//! `SimpleEnum::FISH()`. [`EnumRegistry::call`] is the single entry point the
//! generated accessors (and any dynamic caller) route through.

use crate::declaration::names::is_valid_member_name;
use crate::errors::{EnumError, Result};
use crate::instance::EnumInstance;
use crate::registry::EnumRegistry;

impl EnumRegistry {
    /// Resolve a member accessor call
    ///
    /// Fails with [`EnumError::MethodNotFound`] when `name` is not shaped like
    /// a member name at all, with [`EnumError::ArgumentsNotEmpty`] when any
    /// argument is passed, and with [`EnumError::UndefinedName`] when the name
    /// is well formed but not declared.
    pub fn call<A>(&self, name: &str, arguments: &[A]) -> Result<EnumInstance> {
        if !is_valid_member_name(name) {
            return Err(EnumError::MethodNotFound {
                type_name: self.type_name().to_string(),
                name: name.to_string(),
            });
        }

        if !arguments.is_empty() {
            return Err(EnumError::ArgumentsNotEmpty {
                count: arguments.len(),
            });
        }

        self.get_by_name(name)
    }
}
