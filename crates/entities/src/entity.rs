//! The closed entity hierarchy.
//!
//! `Entity` is a tagged union over four shapes. `Help` carries no payload; the
//! other three wrap a payload struct with an id and a display name. Payloads
//! compare by value, and `Hard::multiplier` is the only field that can change
//! after construction.

use serde::{Deserialize, Serialize};

use entityforge_core::{DomainError, DomainResult, EntityId, Identified, ValueObject};

use crate::kind::EntityKind;

macro_rules! id_name_payload {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $t {
            id: EntityId,
            name: String,
        }

        impl $t {
            pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    name: name.into(),
                }
            }

            pub fn id(&self) -> &EntityId {
                &self.id
            }

            pub fn name(&self) -> &str {
                &self.name
            }

            /// Copy with the id overridden.
            pub fn with_id(self, id: impl Into<EntityId>) -> Self {
                Self { id: id.into(), ..self }
            }

            /// Copy with the name overridden.
            pub fn with_name(self, name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    ..self
                }
            }

            pub fn into_parts(self) -> (EntityId, String) {
                (self.id, self.name)
            }
        }

        impl Identified for $t {
            fn id(&self) -> &EntityId {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl ValueObject for $t {}
    };
}

id_name_payload!(
    /// Payload of [`Entity::Easy`].
    Easy
);

id_name_payload!(
    /// Payload of [`Entity::Medium`].
    Medium
);

/// Payload of [`Entity::Hard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hard {
    id: EntityId,
    name: String,
    multiplier: f32,
}

impl Hard {
    pub const DEFAULT_MULTIPLIER: f32 = 2.0;

    /// Build with [`Hard::DEFAULT_MULTIPLIER`].
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            multiplier: Self::DEFAULT_MULTIPLIER,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: f32) {
        self.multiplier = multiplier;
    }

    pub fn with_id(self, id: impl Into<EntityId>) -> Self {
        Self { id: id.into(), ..self }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_multiplier(self, multiplier: f32) -> Self {
        Self { multiplier, ..self }
    }

    pub fn into_parts(self) -> (EntityId, String, f32) {
        (self.id, self.name, self.multiplier)
    }
}

/// Multipliers compare by total order: `NaN == NaN` and `0.0 != -0.0`.
impl PartialEq for Hard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.multiplier.total_cmp(&other.multiplier).is_eq()
    }
}

impl Identified for Hard {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Hard {}

/// Tagged union of every entity shape.
///
/// Serialized internally tagged, e.g. `{"kind":"EASY","id":"..","name":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum Entity {
    Help,
    Easy(Easy),
    Medium(Medium),
    Hard(Hard),
}

impl ValueObject for Entity {}

impl Entity {
    /// Display name embedded in the `Help` variant.
    pub const HELP_NAME: &'static str = "help";

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Help => EntityKind::Help,
            Entity::Easy(_) => EntityKind::Easy,
            Entity::Medium(_) => EntityKind::Medium,
            Entity::Hard(_) => EntityKind::Hard,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Help => Self::HELP_NAME,
            Entity::Easy(e) => e.name(),
            Entity::Medium(e) => e.name(),
            Entity::Hard(e) => e.name(),
        }
    }

    /// `None` for `Help`, which has no identifier.
    pub fn id(&self) -> Option<&EntityId> {
        self.identified().map(|e| e.id())
    }

    fn identified(&self) -> Option<&dyn Identified> {
        match self {
            Entity::Help => None,
            Entity::Easy(e) => Some(e),
            Entity::Medium(e) => Some(e),
            Entity::Hard(e) => Some(e),
        }
    }

    pub fn as_easy(&self) -> DomainResult<&Easy> {
        match self {
            Entity::Easy(e) => Ok(e),
            other => Err(other.narrowing_error(EntityKind::Easy)),
        }
    }

    pub fn as_medium(&self) -> DomainResult<&Medium> {
        match self {
            Entity::Medium(e) => Ok(e),
            other => Err(other.narrowing_error(EntityKind::Medium)),
        }
    }

    pub fn as_hard(&self) -> DomainResult<&Hard> {
        match self {
            Entity::Hard(e) => Ok(e),
            other => Err(other.narrowing_error(EntityKind::Hard)),
        }
    }

    /// Mutable access is only needed for `Hard`, whose multiplier can change.
    pub fn as_hard_mut(&mut self) -> DomainResult<&mut Hard> {
        match self {
            Entity::Hard(e) => Ok(e),
            other => Err(other.narrowing_error(EntityKind::Hard)),
        }
    }

    fn narrowing_error(&self, expected: EntityKind) -> DomainError {
        DomainError::narrowing(expected.label(), self.kind().label())
    }

    /// Decode a tagged JSON document.
    ///
    /// An unknown `kind` tag is an exhaustiveness violation; a known tag with
    /// missing or ill-typed fields is a validation error.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| DomainError::validation(format!("malformed entity document: {e}")))?;

        let tag = value
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| DomainError::validation("entity document has no `kind` tag"))?;
        let kind = EntityKind::from_label(tag)?;

        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("invalid {kind} entity: {e}")))
    }

    /// Encode as a tagged JSON document.
    ///
    /// A non-finite `Hard` multiplier has no JSON form and is rejected.
    pub fn to_json(&self) -> DomainResult<String> {
        if let Entity::Hard(hard) = self {
            if !hard.multiplier().is_finite() {
                return Err(DomainError::validation(format!(
                    "HARD multiplier {} is not finite",
                    hard.multiplier()
                )));
            }
        }
        serde_json::to_string(self)
            .map_err(|e| DomainError::validation(format!("unencodable entity: {e}")))
    }
}

impl core::fmt::Display for Entity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.id() {
            Some(id) => write!(f, "Entity {} (id={})", self.name(), id),
            None => write!(f, "Entity {}", self.name()),
        }
    }
}

macro_rules! impl_variant_conversions {
    ($t:ident) => {
        impl From<$t> for Entity {
            fn from(value: $t) -> Self {
                Entity::$t(value)
            }
        }

        impl TryFrom<Entity> for $t {
            type Error = DomainError;

            fn try_from(value: Entity) -> Result<Self, Self::Error> {
                match value {
                    Entity::$t(inner) => Ok(inner),
                    other => Err(other.narrowing_error(EntityKind::$t)),
                }
            }
        }
    };
}

impl_variant_conversions!(Easy);
impl_variant_conversions!(Medium);
impl_variant_conversions!(Hard);
