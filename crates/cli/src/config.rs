//! Environment-driven demo configuration.

use entityforge_core::DomainResult;
use entityforge_entities::EntityKind;

/// Comma-separated kinds to demonstrate, e.g. `medium,hard`.
pub const KINDS_ENV: &str = "ENTITYFORGE_KINDS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kinds: Vec<EntityKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kinds: EntityKind::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_raw(std::env::var(KINDS_ENV).ok().as_deref())
    }

    /// Build from the raw `ENTITYFORGE_KINDS` value, `None` when unset.
    pub fn from_raw(raw: Option<&str>) -> DomainResult<Self> {
        let Some(raw) = raw else {
            tracing::debug!("{KINDS_ENV} not set; demonstrating every kind");
            return Ok(Self::default());
        };

        if raw.split(',').all(|part| part.trim().is_empty()) {
            tracing::warn!("{KINDS_ENV} is set but blank; demonstrating every kind");
        }
        Ok(Self {
            kinds: Self::parse_kinds(raw)?,
        })
    }

    /// Parse a comma-separated kind list. Blank input means every kind.
    pub fn parse_kinds(raw: &str) -> DomainResult<Vec<EntityKind>> {
        let kinds = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<DomainResult<Vec<EntityKind>>>()?;

        if kinds.is_empty() {
            Ok(EntityKind::ALL.to_vec())
        } else {
            Ok(kinds)
        }
    }
}
