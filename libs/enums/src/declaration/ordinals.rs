//! Ordinal assignment
//!
//! Members are visited in declaration order. An auto-marker takes the previous
//! ordinal plus one; an explicit value is checked against the configured
//! [`OrdinalPolicy`].

use super::DeclaredValue;
use crate::config::OrdinalPolicy;
use crate::errors::{EnumError, Result};

/// Running ordinal state for one build pass
#[derive(Debug, Clone)]
pub struct OrdinalAssigner {
    policy: OrdinalPolicy,
    last: i64,
}

impl OrdinalAssigner {
    /// Start a pass where the first auto-marker yields `default_ordinal`
    ///
    /// `default_ordinal` must be greater than `i64::MIN`. `EnumMapBuilder::build`
    /// validates its configuration before seeding an assigner.
    pub fn new(policy: OrdinalPolicy, default_ordinal: i64) -> Self {
        Self {
            policy,
            last: default_ordinal.saturating_sub(1),
        }
    }

    /// Ordinal most recently assigned (or the seed before the first assignment)
    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn policy(&self) -> OrdinalPolicy {
        self.policy
    }

    /// Compute the ordinal for the next member and advance the running state
    pub fn assign(&mut self, value: DeclaredValue) -> Result<i64> {
        let ordinal = self.next_ordinal(value)?;
        self.last = ordinal;
        Ok(ordinal)
    }

    fn next_ordinal(&self, value: DeclaredValue) -> Result<i64> {
        match value {
            DeclaredValue::Auto => self
                .last
                .checked_add(1)
                .ok_or(EnumError::OrdinalOverflow { last: self.last }),
            DeclaredValue::Explicit(ordinal) => match self.policy {
                OrdinalPolicy::Permissive => Ok(ordinal),
                OrdinalPolicy::Strict if ordinal > self.last => Ok(ordinal),
                OrdinalPolicy::Strict => Err(EnumError::OrdinalNotIncreasing {
                    last: self.last,
                    current: ordinal,
                }),
            },
        }
    }
}
