//! `entityforge-core` — domain building blocks.
//!
//! Errors, identifiers and equality primitives shared by the entity model.
//! Nothing in here knows about concrete entity variants.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Identified;
pub use error::{DomainError, DomainResult};
pub use id::{EntityId, IdProvider, RandomIds, SequentialIds};
pub use value_object::{ValueObject, same_instance};
