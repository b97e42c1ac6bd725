//! # Sable: ordered sequence and dynamic value primitives
//!
//! Sable provides two building blocks for dynamic data layers, each living
//! in its own crate and re-exported here through a single dependency:
//!
//! * [`Sequence<T>`](sable_sequence::Sequence) — a growable, zero-indexed,
//!   ordered container with the full set of script-style combinators:
//!   stack/queue mutation (`push`, `pop`, `shift`, `unshift`), general
//!   editing (`splice`), non-mutating sections (`slice`, `concat`, `map`,
//!   `filter`), stable sorting, searches and folds. Relative positions
//!   count from the end when negative and clamp when out of range.
//! * [`Entity`](sable_value::Entity) — a dynamic property bag with an
//!   explicit delegation chain: own-member tests, enumerability flags,
//!   chain queries and canonical primitive extraction.
//!
//! The two contracts are independent; both render to text through
//! `Display`. The only fallible operations in the whole surface are the
//! unseeded folds ([`Sequence::reduce`](sable_sequence::Sequence::reduce)
//! and [`reduce_right`](sable_sequence::Sequence::reduce_right)) on an
//! empty sequence, reported through [`Error`](sable_common::error::Error).
//!
//! ## Module Organization
//!
//! * [`common`] - Shared error and result types
//! * [`sequence`] - The ordered sequence container and its combinators
//! * [`value`] - Property-bearing entities and delegation chains

pub use sable_common as common;
pub use sable_sequence as sequence;
pub use sable_value as value;

pub use sable_common::Result;
pub use sable_common::error::{Error, ErrorKind};
pub use sable_sequence::{ConcatPart, Sequence};
pub use sable_value::{Entity, Primitive};
