//! # Ordinal Enums
//!
//! Declarative enum types with named, ordinal-bearing members, built lazily
//! into cached lookup tables.
//!
//! ## Design Philosophy
//!
//! - **Declarations Are Data**: An enum type is an ordered list of constants,
//!   each with an explicit ordinal or the auto-marker
//! - **Build Once**: Name and ordinal tables are derived on first lookup and
//!   never mutated afterwards
//! - **Singleton Members**: One instance per declared name; identity and
//!   equality are distinct (`is_same` vs `is_equal`)
//! - **Same-Type Ordering**: Comparing ordinals across enum types is an error,
//!   never a silent `false`
//!
//! ## Quick Start
//!
//! ### Macro-declared types
//! ```rust
//! use enums::{define_enum, Enumeration};
//!
//! define_enum! {
//!     pub DuplicatedOrdinal {
//!         CAT,
//!         DOG,
//!         BIRD = 3,
//!         FISH,
//!         DEFAULT = 0,
//!     }
//! }
//!
//! let cat = DuplicatedOrdinal::CAT()?;
//! let default = DuplicatedOrdinal::DEFAULT()?;
//! assert!(cat.is_equal(&default));
//! assert!(!cat.is_same(&default));
//! assert_eq!(DuplicatedOrdinal::get_first_by_ordinal(4)?.name(), "FISH");
//! # Ok::<(), enums::EnumError>(())
//! ```
//!
//! ### Runtime declarations
//! ```rust
//! use enums::{Declaration, EnumConfig, EnumRegistry};
//!
//! let registry = EnumRegistry::with_config(
//!     Declaration::new("AccessLevel").auto("READ").auto("WRITE").auto("ADMIN"),
//!     EnumConfig::default(),
//! );
//!
//! let read = registry.get_by_name("READ")?;
//! let admin = registry.get_by_ordinal(2)?;
//! assert!(read.is_less(&admin)?);
//! # Ok::<(), enums::EnumError>(())
//! ```
//!
//! ## Policies
//!
//! - **Ordinals**: `permissive` (default) takes explicit ordinals verbatim;
//!   `strict` requires each explicit ordinal to exceed the previous one
//! - **Names**: `filter` (default) drops ineligible names; `reject` fails the
//!   build on them, except for `__`-prefixed internal constants
//! - **Rendering**: `Display` yields the bare member name; `to_json` yields a
//!   flat `{"type", "name", "ordinal"}` object

mod macros;

mod accessor;
pub mod builder;
pub mod compare;
pub mod config;
pub mod declaration;
pub mod enumeration;
pub mod errors;
pub mod instance;
pub mod registry;

pub use builder::{EnumMapBuilder, EnumMaps};
pub use config::{EnumConfig, NamePolicy, OrdinalPolicy, CONFIG};
pub use declaration::names::{is_internal_name, is_valid_member_name};
pub use declaration::ordinals::OrdinalAssigner;
pub use declaration::{Declaration, DeclaredValue, RawMember};
pub use enumeration::Enumeration;
pub use errors::{EnumError, Result};
pub use instance::{EnumInstance, EnumRecord, EnumType};
pub use registry::EnumRegistry;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
