//! Enum instances and type identity
//!
//! An [`EnumInstance`] is a cheap handle to one member of one enum type. The
//! registry creates exactly one member per declared name; every handle to that
//! member shares the same allocation, so identity ([`EnumInstance::is_same`])
//! is pointer identity while equality ([`EnumInstance::is_equal`]) only looks at
//! the type and the ordinal.

use crate::compare;
use crate::errors::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// Runtime identity of one concrete enum type
///
/// Every registry allocates a fresh id, so two registries never share a type
/// even when their declarations carry the same type name.
#[derive(Clone)]
pub struct EnumType {
    id: u64,
    name: Arc<str>,
}

impl EnumType {
    pub(crate) fn allocate(name: &str) -> Self {
        Self {
            id: NEXT_TYPE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            name: Arc::from(name),
        }
    }

    /// Process-unique id of this type
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Declared type name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EnumType {}

impl Hash for EnumType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

struct Member {
    enum_type: EnumType,
    name: String,
    ordinal: i64,
}

/// Handle to a singleton enum member
#[derive(Clone)]
pub struct EnumInstance {
    inner: Arc<Member>,
}

impl EnumInstance {
    pub(crate) fn new(enum_type: EnumType, name: &str, ordinal: i64) -> Self {
        Self {
            inner: Arc::new(Member {
                enum_type,
                name: name.to_string(),
                ordinal,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn ordinal(&self) -> i64 {
        self.inner.ordinal
    }

    pub fn enum_type(&self) -> &EnumType {
        &self.inner.enum_type
    }

    pub fn type_name(&self) -> &str {
        self.inner.enum_type.name()
    }

    pub(crate) fn ptr_eq(&self, other: &EnumInstance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Same singleton: same type and same name
    pub fn is_same(&self, other: &EnumInstance) -> bool {
        compare::is_same(self, other)
    }

    /// Same type and same ordinal
    pub fn is_equal(&self, other: &EnumInstance) -> bool {
        compare::is_equal(self, other)
    }

    pub fn is_less(&self, other: &EnumInstance) -> Result<bool> {
        compare::is_less(self, other)
    }

    pub fn is_less_or_equal(&self, other: &EnumInstance) -> Result<bool> {
        compare::is_less_or_equal(self, other)
    }

    pub fn is_greater(&self, other: &EnumInstance) -> Result<bool> {
        compare::is_greater(self, other)
    }

    pub fn is_greater_or_equal(&self, other: &EnumInstance) -> Result<bool> {
        compare::is_greater_or_equal(self, other)
    }

    /// Flat `{type, name, ordinal}` record of this member
    pub fn to_record(&self) -> EnumRecord {
        EnumRecord {
            type_name: self.type_name().to_string(),
            name: self.name().to_string(),
            ordinal: self.ordinal(),
        }
    }

    #[cfg(feature = "serialization")]
    pub fn to_json(&self) -> Result<String> {
        compare::to_json(self)
    }
}

impl fmt::Display for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compare::to_string(self))
    }
}

impl fmt::Debug for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}({})", self.type_name(), self.name(), self.ordinal())
    }
}

impl PartialEq for EnumInstance {
    fn eq(&self, other: &Self) -> bool {
        compare::is_equal(self, other)
    }
}

impl Eq for EnumInstance {}

impl Hash for EnumInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enum_type().hash(state);
        self.ordinal().hash(state);
    }
}

/// Ordinal order within one type; instances of different types are unordered
impl PartialOrd for EnumInstance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare::compare(self, other).ok()
    }
}

impl Serialize for EnumInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// Serialized form of an enum member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub ordinal: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_type_ids_are_unique() {
        let a = EnumType::allocate("Animal");
        let b = EnumType::allocate("Animal");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.name(), b.name());
        assert_eq!(a.to_string(), "Animal");
    }

    #[test]
    fn test_accessors_and_formatting() {
        let animal = EnumType::allocate("Animal");
        let fish = EnumInstance::new(animal, "FISH", 4);

        assert_eq!(fish.name(), "FISH");
        assert_eq!(fish.ordinal(), 4);
        assert_eq!(fish.type_name(), "Animal");
        assert_eq!(fish.to_string(), "FISH");
        assert_eq!(format!("{:?}", fish), "Animal::FISH(4)");
    }

    #[test]
    fn test_clone_keeps_identity() {
        let animal = EnumType::allocate("Animal");
        let cat = EnumInstance::new(animal.clone(), "CAT", 0);
        let cat_again = cat.clone();
        let other_cat = EnumInstance::new(animal, "CAT", 0);

        assert!(cat.is_same(&cat_again));
        // Equal fields but a different allocation is not the same singleton
        assert!(!cat.is_same(&other_cat));
        assert!(cat.is_equal(&other_cat));
    }

    #[test]
    fn test_hash_follows_equality() {
        let animal = EnumType::allocate("Animal");
        let cat = EnumInstance::new(animal.clone(), "CAT", 0);
        let default = EnumInstance::new(animal.clone(), "DEFAULT", 0);
        let dog = EnumInstance::new(animal, "DOG", 1);

        let set: HashSet<EnumInstance> = [cat, default, dog].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_partial_ord_across_types() {
        let animal = EnumType::allocate("Animal");
        let level = EnumType::allocate("AccessLevel");
        let cat = EnumInstance::new(animal.clone(), "CAT", 0);
        let dog = EnumInstance::new(animal, "DOG", 1);
        let read = EnumInstance::new(level, "READ", 0);

        assert!(cat < dog);
        assert_eq!(cat.partial_cmp(&read), None);
        assert_ne!(cat, read);
    }

    #[test]
    fn test_record() {
        let fish = EnumInstance::new(EnumType::allocate("Animal"), "FISH", 4);
        assert_eq!(
            fish.to_record(),
            EnumRecord {
                type_name: "Animal".to_string(),
                name: "FISH".to_string(),
                ordinal: 4,
            }
        );
    }
}
