//! Statically declared enum types
//!
//! Types generated by [`define_enum!`](crate::define_enum) implement
//! [`Enumeration`], which hands out a `'static` registry and forwards the
//! canonical lookups to it.

use crate::errors::Result;
use crate::instance::EnumInstance;
use crate::registry::EnumRegistry;

/// A Rust type backed by a process-wide enum registry
pub trait Enumeration: 'static {
    /// The registry holding this type's members
    fn registry() -> &'static EnumRegistry;

    fn type_name() -> &'static str {
        Self::registry().type_name()
    }

    fn get_by_name(name: &str) -> Result<EnumInstance> {
        Self::registry().get_by_name(name)
    }

    /// First-declared member carrying `ordinal`
    fn get_first_by_ordinal(ordinal: i64) -> Result<EnumInstance> {
        Self::registry().get_by_ordinal(ordinal)
    }

    fn get_all_by_ordinal(ordinal: i64) -> Result<&'static [EnumInstance]> {
        Self::registry().get_all_by_ordinal(ordinal)
    }

    fn is_name_defined(name: &str) -> bool {
        Self::registry().is_name_defined(name)
    }

    fn is_ordinal_defined(ordinal: i64) -> bool {
        Self::registry().is_ordinal_defined(ordinal)
    }

    /// Members in declaration order
    fn members() -> Result<Vec<EnumInstance>> {
        Ok(Self::registry().members()?.cloned().collect())
    }

    /// Whether `instance` is a member of this type
    fn contains(instance: &EnumInstance) -> bool {
        instance.enum_type() == Self::registry().enum_type()
    }

    /// Resolve a member accessor call by name
    fn call<A>(name: &str, arguments: &[A]) -> Result<EnumInstance> {
        Self::registry().call(name, arguments)
    }
}
