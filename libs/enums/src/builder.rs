//! Enum map construction
//!
//! [`EnumMapBuilder`] turns a declaration into the two lookup tables an enum
//! type needs: name → instance and ordinal → instances. It does not know what
//! an instance is; callers inject a factory taking `(name, ordinal)`, which
//! keeps the builder testable with plain strings.
//!
//! ```rust
//! use enums::{Declaration, EnumConfig, EnumMapBuilder};
//!
//! let declaration = Declaration::new("Animal")
//!     .auto("CAT")
//!     .auto("DOG")
//!     .explicit("FISH", 1);
//!
//! let maps = EnumMapBuilder::new(&EnumConfig::default(), |name: &str, ordinal| {
//!     format!("{}|{}", name, ordinal)
//! })
//! .build(&declaration)
//! .unwrap();
//!
//! assert_eq!(maps.by_name("FISH").unwrap(), "FISH|1");
//! assert_eq!(maps.by_ordinal(1).unwrap(), &["DOG|1".to_string(), "FISH|1".to_string()]);
//! ```

use crate::config::EnumConfig;
use crate::declaration::names::{screen_name, NameVerdict};
use crate::declaration::ordinals::OrdinalAssigner;
use crate::declaration::Declaration;
use crate::errors::{EnumError, Result};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Lookup tables for one enum type
///
/// Both maps iterate in declaration order. Within an ordinal bucket the
/// first-declared instance comes first.
#[derive(Debug, Clone)]
pub struct EnumMaps<I> {
    name_to_instance: IndexMap<String, I>,
    ordinal_to_instances: IndexMap<i64, Vec<I>>,
}

impl<I> Default for EnumMaps<I> {
    fn default() -> Self {
        Self {
            name_to_instance: IndexMap::new(),
            ordinal_to_instances: IndexMap::new(),
        }
    }
}

impl<I> EnumMaps<I> {
    pub fn name_to_instance(&self) -> &IndexMap<String, I> {
        &self.name_to_instance
    }

    pub fn ordinal_to_instances(&self) -> &IndexMap<i64, Vec<I>> {
        &self.ordinal_to_instances
    }

    pub fn by_name(&self, name: &str) -> Option<&I> {
        self.name_to_instance.get(name)
    }

    /// All instances sharing `ordinal`, first-declared first
    pub fn by_ordinal(&self, ordinal: i64) -> Option<&[I]> {
        self.ordinal_to_instances.get(&ordinal).map(Vec::as_slice)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_instance.contains_key(name)
    }

    pub fn contains_ordinal(&self, ordinal: i64) -> bool {
        self.ordinal_to_instances.contains_key(&ordinal)
    }

    /// Number of members (not distinct ordinals)
    pub fn len(&self) -> usize {
        self.name_to_instance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_instance.is_empty()
    }

    /// Instances in declaration order
    pub fn instances(&self) -> impl Iterator<Item = &I> {
        self.name_to_instance.values()
    }
}

/// Builds [`EnumMaps`] from a declaration with an injected instance factory
pub struct EnumMapBuilder<F> {
    config: EnumConfig,
    create_instance: F,
}

impl<F> EnumMapBuilder<F> {
    pub fn new<I>(config: &EnumConfig, create_instance: F) -> Self
    where
        F: FnMut(&str, i64) -> I,
    {
        Self {
            config: *config,
            create_instance,
        }
    }

    /// Run one build pass over `declaration`
    ///
    /// Members whose names are screened out do not advance the running
    /// ordinal. An invalid configuration or the first declaration error
    /// aborts the pass; nothing partial is returned.
    pub fn build<I>(mut self, declaration: &Declaration) -> Result<EnumMaps<I>>
    where
        F: FnMut(&str, i64) -> I,
        I: Clone,
    {
        self.config.validate()?;

        let mut assigner =
            OrdinalAssigner::new(self.config.ordinal_policy, self.config.default_ordinal);
        let mut maps = EnumMaps::default();

        debug!(
            enum_type = declaration.type_name(),
            declared = declaration.len(),
            "Building enum maps"
        );

        for member in declaration.members() {
            if screen_name(&member.name, self.config.name_policy)? == NameVerdict::Skip {
                trace!(
                    enum_type = declaration.type_name(),
                    name = %member.name,
                    "Skipping non-member constant"
                );
                continue;
            }

            if maps.contains_name(&member.name) {
                return Err(EnumError::DuplicateName {
                    type_name: declaration.type_name().to_string(),
                    name: member.name.clone(),
                });
            }

            let ordinal = assigner.assign(member.value)?;
            let instance = (self.create_instance)(&member.name, ordinal);

            maps.ordinal_to_instances
                .entry(ordinal)
                .or_default()
                .push(instance.clone());
            maps.name_to_instance.insert(member.name.clone(), instance);
        }

        debug!(
            enum_type = declaration.type_name(),
            members = maps.len(),
            ordinals = maps.ordinal_to_instances.len(),
            "Built enum maps"
        );

        Ok(maps)
    }
}
