//! Per-type enum registry
//!
//! An [`EnumRegistry`] owns one declaration and the lookup tables derived from
//! it. The tables are built on first use, exactly once, behind a
//! `once_cell::sync::OnceCell`:
//!
//! ```text
//! Uninitialized ──first lookup──▶ Building ──ok──▶ Ready (immutable, lock-free reads)
//!       ▲                            │
//!       └────────────err─────────────┘ (next lookup retries the build)
//! ```
//!
//! Concurrent first callers block on the single build and all observe the
//! finished tables. Nothing is ever written after the transition to Ready,
//! except by [`EnumRegistry::reset`], which needs exclusive access.

use crate::builder::{EnumMapBuilder, EnumMaps};
use crate::config::{self, EnumConfig};
use crate::declaration::Declaration;
use crate::errors::{EnumError, Result};
use crate::instance::{EnumInstance, EnumRecord, EnumType};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

/// Lookup tables and singleton instances for one enum type
pub struct EnumRegistry {
    enum_type: EnumType,
    declaration: Declaration,
    config: EnumConfig,
    table: OnceCell<EnumMaps<EnumInstance>>,
}

impl EnumRegistry {
    /// Create a registry that builds with the process-wide configuration
    pub fn new(declaration: Declaration) -> Self {
        Self::with_config(declaration, config::global())
    }

    /// Create a registry with an explicit configuration
    pub fn with_config(declaration: Declaration, config: EnumConfig) -> Self {
        Self {
            enum_type: EnumType::allocate(declaration.type_name()),
            declaration,
            config,
            table: OnceCell::new(),
        }
    }

    pub fn enum_type(&self) -> &EnumType {
        &self.enum_type
    }

    pub fn type_name(&self) -> &str {
        self.enum_type.name()
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn config(&self) -> &EnumConfig {
        &self.config
    }

    /// Whether the tables have been built
    pub fn is_ready(&self) -> bool {
        self.table.get().is_some()
    }

    /// Build the tables now instead of on first lookup
    pub fn initialize(&self) -> Result<()> {
        self.maps().map(|_| ())
    }

    fn maps(&self) -> Result<&EnumMaps<EnumInstance>> {
        self.table.get_or_try_init(|| self.build())
    }

    fn build(&self) -> Result<EnumMaps<EnumInstance>> {
        let enum_type = self.enum_type.clone();
        let result = EnumMapBuilder::new(&self.config, |name: &str, ordinal| {
            EnumInstance::new(enum_type.clone(), name, ordinal)
        })
        .build(&self.declaration);

        match &result {
            Ok(maps) => debug!(
                enum_type = self.type_name(),
                members = maps.len(),
                "Enum registry ready"
            ),
            Err(e) => warn!(
                enum_type = self.type_name(),
                error = %e,
                "Enum registry build failed"
            ),
        }
        result
    }

    /// Look up the singleton member called `name`
    pub fn get_by_name(&self, name: &str) -> Result<EnumInstance> {
        self.maps()?
            .by_name(name)
            .cloned()
            .ok_or_else(|| EnumError::UndefinedName {
                type_name: self.type_name().to_string(),
                name: name.to_string(),
            })
    }

    /// Look up the first-declared member carrying `ordinal`
    pub fn get_by_ordinal(&self, ordinal: i64) -> Result<EnumInstance> {
        self.get_all_by_ordinal(ordinal)?
            .first()
            .cloned()
            .ok_or_else(|| self.undefined_ordinal(ordinal))
    }

    /// Look up every member carrying `ordinal`, in declaration order
    pub fn get_all_by_ordinal(&self, ordinal: i64) -> Result<&[EnumInstance]> {
        self.maps()?
            .by_ordinal(ordinal)
            .ok_or_else(|| self.undefined_ordinal(ordinal))
    }

    fn undefined_ordinal(&self, ordinal: i64) -> EnumError {
        EnumError::UndefinedOrdinal {
            type_name: self.type_name().to_string(),
            ordinal,
        }
    }

    /// Whether `name` is a member; `false` when the tables cannot be built
    pub fn is_name_defined(&self, name: &str) -> bool {
        self.maps().map(|maps| maps.contains_name(name)).unwrap_or(false)
    }

    /// Whether any member carries `ordinal`; `false` when the tables cannot be built
    pub fn is_ordinal_defined(&self, ordinal: i64) -> bool {
        self.maps()
            .map(|maps| maps.contains_ordinal(ordinal))
            .unwrap_or(false)
    }

    /// Members in declaration order
    pub fn members(&self) -> Result<impl Iterator<Item = &EnumInstance> + '_> {
        Ok(self.maps()?.instances())
    }

    /// Member names in declaration order
    pub fn names(&self) -> Result<impl Iterator<Item = &str> + '_> {
        Ok(self.maps()?.name_to_instance().keys().map(String::as_str))
    }

    /// Number of members
    pub fn len(&self) -> Result<usize> {
        Ok(self.maps()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.maps()?.is_empty())
    }

    /// Resolve a serialized record back to its singleton
    pub fn from_record(&self, record: &EnumRecord) -> Result<EnumInstance> {
        if record.type_name != self.type_name() {
            return Err(EnumError::TypeMismatch {
                left: record.type_name.clone(),
                right: self.type_name().to_string(),
            });
        }

        let instance = self.get_by_name(&record.name)?;
        if instance.ordinal() != record.ordinal {
            return Err(EnumError::RecordMismatch {
                type_name: self.type_name().to_string(),
                name: record.name.clone(),
                declared: instance.ordinal(),
                recorded: record.ordinal,
            });
        }
        Ok(instance)
    }

    /// Resolve JSON produced by `to_json` back to its singleton
    #[cfg(feature = "serialization")]
    pub fn from_json(&self, json: &str) -> Result<EnumInstance> {
        let record: EnumRecord = serde_json::from_str(json)?;
        self.from_record(&record)
    }

    /// Drop the built tables so the next lookup rebuilds them
    ///
    /// Instances handed out before the reset stay valid but are no longer the
    /// singletons returned by later lookups. Needs exclusive access, so only
    /// owned registries can be reset; the `'static` registries behind
    /// [`define_enum!`](crate::define_enum) types cannot.
    ///
    /// ```rust
    /// use enums::{Declaration, EnumConfig, EnumRegistry};
    ///
    /// let mut registry = EnumRegistry::with_config(
    ///     Declaration::new("AccessLevel").auto("READ").auto("WRITE"),
    ///     EnumConfig::default(),
    /// );
    /// let before = registry.get_by_name("READ")?;
    ///
    /// registry.reset();
    /// assert!(!registry.is_ready());
    ///
    /// let after = registry.get_by_name("READ")?;
    /// assert!(before.is_equal(&after));
    /// assert!(!before.is_same(&after));
    /// # Ok::<(), enums::EnumError>(())
    /// ```
    pub fn reset(&mut self) {
        if self.table.take().is_some() {
            debug!(enum_type = self.type_name(), "Enum registry reset");
        }
    }
}

impl std::fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumRegistry")
            .field("enum_type", &self.enum_type)
            .field("declared", &self.declaration.len())
            .field("ready", &self.is_ready())
            .finish()
    }
}
