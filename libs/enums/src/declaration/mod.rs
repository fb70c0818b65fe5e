//! Enum declarations
//!
//! A [`Declaration`] is the ordered list of constants an enum type is built
//! from: each entry pairs a name with either an explicit ordinal or the
//! auto-marker. Declarations are plain data; name screening and ordinal
//! assignment happen when a registry builds its tables.
//!
//! ```rust
//! use enums::Declaration;
//!
//! let animals = Declaration::new("Animal")
//!     .auto("CAT")
//!     .auto("DOG")
//!     .explicit("BIRD", 3)
//!     .auto("FISH");
//! assert_eq!(animals.len(), 4);
//! ```

pub mod names;
pub mod ordinals;

use serde::{Deserialize, Serialize};

/// Declared value of one constant
///
/// Serialized as `null` for [`DeclaredValue::Auto`] and as a plain integer for
/// [`DeclaredValue::Explicit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum DeclaredValue {
    /// Take the previous ordinal plus one
    Auto,
    /// Use this ordinal
    Explicit(i64),
}

impl From<Option<i64>> for DeclaredValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(DeclaredValue::Auto, DeclaredValue::Explicit)
    }
}

impl From<DeclaredValue> for Option<i64> {
    fn from(value: DeclaredValue) -> Self {
        match value {
            DeclaredValue::Auto => None,
            DeclaredValue::Explicit(ordinal) => Some(ordinal),
        }
    }
}

impl From<i64> for DeclaredValue {
    fn from(ordinal: i64) -> Self {
        DeclaredValue::Explicit(ordinal)
    }
}

/// One declared constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMember {
    pub name: String,
    #[serde(default = "auto_value")]
    pub value: DeclaredValue,
}

fn auto_value() -> DeclaredValue {
    DeclaredValue::Auto
}

impl RawMember {
    pub fn new(name: impl Into<String>, value: impl Into<DeclaredValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn auto(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredValue::Auto)
    }
}

/// Ordered constants of one enum type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Identifier of the enum type, used in errors and JSON records
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

impl Declaration {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            members: Vec::new(),
        }
    }

    /// Append a constant with an explicit or automatic value
    pub fn member(mut self, name: impl Into<String>, value: impl Into<DeclaredValue>) -> Self {
        self.members.push(RawMember::new(name, value));
        self
    }

    /// Append a constant whose ordinal follows the previous one
    pub fn auto(self, name: impl Into<String>) -> Self {
        self.member(name, DeclaredValue::Auto)
    }

    /// Append a constant with a fixed ordinal
    pub fn explicit(self, name: impl Into<String>, ordinal: i64) -> Self {
        self.member(name, DeclaredValue::Explicit(ordinal))
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn members(&self) -> &[RawMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Parse a declaration from its JSON form
    ///
    /// ```json
    /// {"type": "Animal", "members": [{"name": "CAT", "value": null}, {"name": "BIRD", "value": 3}]}
    /// ```
    #[cfg(feature = "serialization")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
