//! Identity carried by payload-bearing entities.

use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Identified {
    /// Returns the entity identifier.
    fn id(&self) -> &EntityId;

    /// Returns the display name assigned at construction.
    fn name(&self) -> &str;
}
