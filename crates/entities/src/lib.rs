//! Entities domain module.
//!
//! A closed entity hierarchy, the factory that builds it from an
//! [`EntityKind`], and the consumers that dispatch over it. Pure in-memory
//! logic (no IO beyond caller-supplied writers, no shared state).

pub mod dispatch;
pub mod entity;
pub mod factory;
pub mod kind;

pub use dispatch::{classify, classify_tag};
pub use entity::{Easy, Entity, Hard, Medium};
pub use factory::EntityFactory;
pub use kind::EntityKind;
