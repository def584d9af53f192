//! Closed set of entity categories.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use entityforge_core::{DomainError, DomainResult};

/// Category label used to select which entity variant the factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Help,
    Easy,
    Medium,
    Hard,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Help,
        EntityKind::Easy,
        EntityKind::Medium,
        EntityKind::Hard,
    ];

    /// Raw upper-case label, e.g. `"MEDIUM"`.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Help => "HELP",
            EntityKind::Easy => "EASY",
            EntityKind::Medium => "MEDIUM",
            EntityKind::Hard => "HARD",
        }
    }

    /// Label with the first letter upper-cased and the rest lower-cased.
    pub fn formatted_name(self) -> String {
        let lower = self.label().to_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Strict lookup by raw label (exact case).
    pub fn from_label(label: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| DomainError::exhaustiveness(label))
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive parse; surrounding whitespace is ignored.
impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_label(&trimmed.to_ascii_uppercase())
            .map_err(|_| DomainError::exhaustiveness(trimmed))
    }
}
