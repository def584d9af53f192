//! Opaque entity identifiers and the providers that mint them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Opaque identifier token carried by payload-bearing entities.
///
/// Freshly minted ids are hyphenated UUIDv4 text, but any string is accepted
/// when an entity is built by hand. Callers must not rely on any relation
/// between successive ids beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Length of the hyphenated textual form of a UUID.
    pub const UUID_TEXT_LEN: usize = 36;

    /// Mint a fresh random identifier (UUIDv4, hyphenated lowercase hex).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the token as a UUID.
    ///
    /// Hand-built ids such as `"id"` are legal tokens but fail here.
    pub fn to_uuid(&self) -> DomainResult<Uuid> {
        Uuid::from_str(&self.0).map_err(|e| DomainError::invalid_id(format!("EntityId: {e}")))
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Source of fresh identifiers for newly constructed entities.
pub trait IdProvider {
    fn next_id(&mut self) -> EntityId;
}

/// Default provider: random UUIDv4 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&mut self) -> EntityId {
        EntityId::generate()
    }
}

/// Deterministic provider yielding `<prefix>-1`, `<prefix>-2`, ...
///
/// Unique within one provider instance only.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_uuid_shape() {
        let id = EntityId::generate();
        let s = id.as_str();
        assert_eq!(s.len(), EntityId::UUID_TEXT_LEN);
        let hyphens: Vec<usize> = s.match_indices('-').map(|(i, _)| i).collect();
        assert_eq!(hyphens, vec![8, 13, 18, 23]);
        assert_eq!(id.to_uuid().unwrap().get_version_num(), 4);
    }

    #[test]
    fn hand_built_id_is_not_a_uuid() {
        let id = EntityId::from("id");
        assert_eq!(id.to_string(), "id");
        assert!(matches!(id.to_uuid(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id().as_str(), "t-1");
        assert_eq!(ids.next_id().as_str(), "t-2");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            #[test]
            fn random_ids_do_not_repeat(n in 1usize..200) {
                let mut provider = RandomIds;
                let ids: HashSet<EntityId> = (0..n).map(|_| provider.next_id()).collect();
                prop_assert_eq!(ids.len(), n);
            }
        }
    }
}
