//! Dynamic property-bearing values with an explicit delegation chain.
//!
//! This crate provides the universal introspection surface any value-like
//! entity supports: stringification, canonical primitive extraction, own
//! member tests, enumerability checks and delegation-chain queries.
//!
//! # Main Components
//!
//! - [`crate::entity::Entity`]: a property bag with an optional parent. A
//!   member lookup that misses on the entity itself falls back to the
//!   parent, then the parent's parent, and so on up the delegation chain.
//!   Own-member and enumerability queries never consult the chain.
//! - [`crate::primitive::Primitive`]: the canonical scalar forms an entity
//!   can reduce to (`Bool`, `Number`, `Text`).
//!
//! Delegation is an explicit, inspectable parent relation
//! (`Option<Arc<Entity>>`), not an implicit runtime mechanism: chain
//! membership is decided by pointer identity, so two structurally equal
//! parents are still distinct links.
//!
//! All operations here are pure queries with no error conditions.

pub mod entity;
pub mod primitive;

pub use entity::Entity;
pub use primitive::Primitive;
