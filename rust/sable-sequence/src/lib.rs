//! A growable ordered sequence with script-style combinators.
//!
//! This crate provides [`Sequence<T>`](crate::sequence::Sequence), a mutable,
//! zero-indexed, contiguous container of elements of a single type, together
//! with the full operation set expected of a dynamic-language array: stack and
//! queue mutation (`push`, `pop`, `shift`, `unshift`), non-mutating section
//! extraction (`slice`, `concat`, `filter`, `map`), in-place reordering
//! (`reverse`, stable `sort`/`sort_by`), general editing (`splice`), searches
//! (`index_of`, `last_index_of`, `every`, `some`) and folds.
//!
//! # Position resolution
//!
//! Operations that accept positions (`slice`, `splice`, `index_of`,
//! `last_index_of`) take *relative* positions: a negative value counts back
//! from the end of the sequence, and out-of-range values clamp to the valid
//! range rather than fail. The resolution rules live in the
//! [`bounds`](crate::bounds) module.
//!
//! # Fallibility
//!
//! Every operation is total except the unseeded folds:
//! [`reduce`](crate::sequence::Sequence::reduce) and
//! [`reduce_right`](crate::sequence::Sequence::reduce_right) fail with
//! [`ErrorKind::EmptySequence`](sable_common::error::ErrorKind::EmptySequence)
//! when the sequence is empty and no initial accumulator exists. `pop` and
//! `shift` on an empty sequence return `None`.
//!
//! # Main Components
//!
//! - [`crate::sequence::Sequence`]: the container itself.
//! - [`crate::concat::ConcatPart`]: a single argument to
//!   [`concat`](crate::sequence::Sequence::concat), either one element or a
//!   whole sequence to splice in.
//! - [`crate::bounds`]: relative position resolution shared by the
//!   position-taking operations.

pub mod bounds;
pub mod concat;
pub mod sequence;

pub use concat::ConcatPart;
pub use sequence::Sequence;
