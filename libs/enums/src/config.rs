//! Configuration for ordinal assignment and member-name handling
//!
//! Registries read the process-wide [`CONFIG`] unless a configuration is
//! injected explicitly. The global value is loaded once from the environment;
//! invalid values fall back to the defaults.

use crate::errors::{EnumError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Environment variable holding the ordinal the first auto-assigned member receives
pub const ENV_DEFAULT_ORDINAL: &str = "ENUMS_DEFAULT_ORDINAL";
/// Environment variable selecting the ordinal policy (`permissive` or `strict`)
pub const ENV_ORDINAL_POLICY: &str = "ENUMS_ORDINAL_POLICY";
/// Environment variable selecting the name policy (`filter` or `reject`)
pub const ENV_NAME_POLICY: &str = "ENUMS_NAME_POLICY";

/// How explicit ordinals relate to the running ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalPolicy {
    /// Explicit ordinals are taken verbatim; duplicates create aliases
    #[default]
    Permissive,
    /// Explicit ordinals must be strictly greater than the previous ordinal
    Strict,
}

/// What happens to declared names that are not eligible member names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Ineligible names are silently left out of the member set
    #[default]
    Filter,
    /// Ineligible names fail the build; `__`-prefixed internal names are still skipped
    Reject,
}

impl FromStr for OrdinalPolicy {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(OrdinalPolicy::Permissive),
            "strict" => Ok(OrdinalPolicy::Strict),
            other => Err(EnumError::InvalidConfig(format!(
                "unknown ordinal policy '{}', expected 'permissive' or 'strict'",
                other
            ))),
        }
    }
}

impl fmt::Display for OrdinalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrdinalPolicy::Permissive => f.write_str("permissive"),
            OrdinalPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for NamePolicy {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(NamePolicy::Filter),
            "reject" => Ok(NamePolicy::Reject),
            other => Err(EnumError::InvalidConfig(format!(
                "unknown name policy '{}', expected 'filter' or 'reject'",
                other
            ))),
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePolicy::Filter => f.write_str("filter"),
            NamePolicy::Reject => f.write_str("reject"),
        }
    }
}

/// Settings shared by every enum built with them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConfig {
    /// Ordinal of the first member when it is auto-assigned
    pub default_ordinal: i64,
    /// Policy for explicit ordinals
    pub ordinal_policy: OrdinalPolicy,
    /// Policy for ineligible member names
    pub name_policy: NamePolicy,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            default_ordinal: 0,
            ordinal_policy: OrdinalPolicy::Permissive,
            name_policy: NamePolicy::Filter,
        }
    }
}

impl EnumConfig {
    /// Strict ordinals and rejected names
    pub fn strict() -> Self {
        Self {
            ordinal_policy: OrdinalPolicy::Strict,
            name_policy: NamePolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_default_ordinal(mut self, default_ordinal: i64) -> Self {
        self.default_ordinal = default_ordinal;
        self
    }

    pub fn with_ordinal_policy(mut self, policy: OrdinalPolicy) -> Self {
        self.ordinal_policy = policy;
        self
    }

    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Unset variables keep their default. Malformed values are reported as
    /// errors rather than silently replaced.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_DEFAULT_ORDINAL) {
            config.default_ordinal = raw.trim().parse().map_err(|_| {
                EnumError::InvalidConfig(format!(
                    "{} must be an integer, got '{}'",
                    ENV_DEFAULT_ORDINAL, raw
                ))
            })?;
        }
        if let Ok(raw) = env::var(ENV_ORDINAL_POLICY) {
            config.ordinal_policy = raw.parse()?;
        }
        if let Ok(raw) = env::var(ENV_NAME_POLICY) {
            config.name_policy = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // The running ordinal starts one below the default.
        if self.default_ordinal == i64::MIN {
            return Err(EnumError::InvalidConfig(
                "default_ordinal must be greater than i64::MIN".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from TOML text
    #[cfg(feature = "toml-config")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| EnumError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "toml-config")]
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read enum config {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse enum config {:?}", path))
    }
}

/// Global configuration loaded once on first use
pub static CONFIG: Lazy<EnumConfig> = Lazy::new(|| match EnumConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
        warn!(error = %e, "Invalid enum configuration in environment, using defaults");
        EnumConfig::default()
    }
});

/// Get the process-wide configuration
pub fn global() -> EnumConfig {
    *CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumConfig::default();
        assert_eq!(config.default_ordinal, 0);
        assert_eq!(config.ordinal_policy, OrdinalPolicy::Permissive);
        assert_eq!(config.name_policy, NamePolicy::Filter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = EnumConfig::default().with_default_ordinal(i64::MIN);
        assert!(config.validate().is_err());

        let config = EnumConfig::default().with_default_ordinal(-5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<OrdinalPolicy>().unwrap(), OrdinalPolicy::Strict);
        assert_eq!(" Permissive ".parse::<OrdinalPolicy>().unwrap(), OrdinalPolicy::Permissive);
        assert_eq!("REJECT".parse::<NamePolicy>().unwrap(), NamePolicy::Reject);
        assert!("sometimes".parse::<OrdinalPolicy>().is_err());
        assert!("ignore".parse::<NamePolicy>().is_err());

        assert_eq!(OrdinalPolicy::Strict.to_string(), "strict");
        assert_eq!(NamePolicy::Filter.to_string(), "filter");
    }

    #[test]
    fn test_strict_preset() {
        let config = EnumConfig::strict();
        assert_eq!(config.ordinal_policy, OrdinalPolicy::Strict);
        assert_eq!(config.name_policy, NamePolicy::Reject);
        assert_eq!(config.default_ordinal, 0);
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_from_toml_str() {
        let config = EnumConfig::from_toml_str(
            r#"
default_ordinal = 1
ordinal_policy = "strict"
"#,
        )
        .unwrap();

        assert_eq!(config.default_ordinal, 1);
        assert_eq!(config.ordinal_policy, OrdinalPolicy::Strict);
        // Missing keys keep their defaults
        assert_eq!(config.name_policy, NamePolicy::Filter);

        assert!(EnumConfig::from_toml_str("ordinal_policy = \"loose\"").is_err());
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enums.toml");
        std::fs::write(&path, "name_policy = \"reject\"\n").unwrap();

        let config = EnumConfig::load(&path).unwrap();
        assert_eq!(config.name_policy, NamePolicy::Reject);

        let missing = dir.path().join("missing.toml");
        assert!(EnumConfig::load(&missing).is_err());
    }
}
