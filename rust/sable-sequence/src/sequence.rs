//! The ordered sequence container.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use sable_common::{Result, error::Error};

use crate::bounds;
use crate::concat::ConcatPart;

/// A growable, mutable, zero-indexed, contiguous container of elements of a
/// single type.
///
/// `Sequence<T>` is backed by a `Vec<T>` and maintains the invariant that
/// [`len()`](Sequence::len) is always one past the highest occupied index,
/// with indices contiguous from 0.
///
/// The operation set splits into three groups:
///
/// - **In-place mutators**: [`push`](Sequence::push), [`pop`](Sequence::pop),
///   [`shift`](Sequence::shift), [`unshift`](Sequence::unshift),
///   [`splice`](Sequence::splice), [`reverse`](Sequence::reverse),
///   [`sort`](Sequence::sort), [`sort_by`](Sequence::sort_by) and
///   [`set_len`](Sequence::set_len). The reordering mutators return the
///   receiver so calls can be chained.
/// - **Non-mutating producers**: [`concat`](Sequence::concat),
///   [`slice`](Sequence::slice), [`map`](Sequence::map) and
///   [`filter`](Sequence::filter) build a new sequence and leave the
///   receiver untouched.
/// - **Queries**: [`index_of`](Sequence::index_of),
///   [`last_index_of`](Sequence::last_index_of),
///   [`every`](Sequence::every), [`some`](Sequence::some),
///   [`join`](Sequence::join) and the folds.
///
/// Relative positions (`slice`, `splice`, the searches) follow the rules in
/// [`crate::bounds`]: negative counts from the end, out-of-range clamps.
///
/// A `Sequence` is not safe for concurrent mutation; it is `Send` and `Sync`
/// whenever `T` is, and concurrent reads of an unmutated instance are fine.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Sequence<T> {
        Sequence { items: Vec::new() }
    }

    /// Creates an empty sequence with space reserved for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resizes the sequence to `new_len` elements.
    ///
    /// Shrinking truncates; growing fills the new slots with `T::default()`,
    /// the placeholder for an element that was never assigned.
    pub fn set_len(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.items.resize_with(new_len, T::default);
    }

    /// Returns a reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consumes the sequence and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements in ascending index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements in ascending index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Appends an element at the end and returns the new length.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Appends every element of `items` at the end, in order, and returns the
    /// new length.
    pub fn push_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self.items.len()
    }

    /// Removes and returns the last element, or `None` if the sequence is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element, shifting all subsequent
    /// elements one index down. Returns `None` if the sequence is empty.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Inserts an element at the front and returns the new length.
    pub fn unshift(&mut self, item: T) -> usize {
        self.items.insert(0, item);
        self.items.len()
    }

    /// Inserts every element of `items` at the front, preserving their order,
    /// and returns the new length.
    pub fn unshift_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        // The returned iterator performs the insertion on drop.
        let _ = self.items.splice(0..0, items);
        self.items.len()
    }

    /// Builds a new sequence of this sequence's elements followed by the
    /// flattened contents of each part.
    ///
    /// A [`ConcatPart::Seq`] part is spliced in element by element; a
    /// [`ConcatPart::Item`] part is appended directly. The receiver is not
    /// mutated.
    pub fn concat<I>(&self, parts: I) -> Sequence<T>
    where
        T: Clone,
        I: IntoIterator<Item = ConcatPart<T>>,
    {
        let parts: Vec<ConcatPart<T>> = parts.into_iter().collect();
        let extra: usize = parts.iter().map(ConcatPart::len).sum();
        let mut items = Vec::with_capacity(self.items.len() + extra);
        items.extend_from_slice(&self.items);
        for part in parts {
            part.append_into(&mut items);
        }
        Sequence { items }
    }

    /// Renders every element and interleaves `separator` between them.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.items.iter().join(separator)
    }

    /// Like [`join`](Sequence::join), with a caller-supplied per-element
    /// rendering instead of the element's `Display` form.
    pub fn join_with<F>(&self, separator: &str, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.items.iter().map(render).join(separator)
    }

    /// Reverses the element order in place and returns the receiver.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Returns a new sequence holding copies of the elements in
    /// `[start, end)`.
    ///
    /// `None` bounds default to the start and end of the sequence. Negative
    /// positions count from the end; out-of-range positions clamp. An
    /// inverted range yields an empty sequence. The receiver is not mutated.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Sequence<T>
    where
        T: Clone,
    {
        let len = self.items.len();
        let start = bounds::resolve(start.unwrap_or(0), len);
        let end = bounds::resolve(end.unwrap_or(len as isize), len);
        if start >= end {
            return Sequence::new();
        }
        Sequence {
            items: self.items[start..end].to_vec(),
        }
    }

    /// Sorts the sequence in place by the rendered text of each element and
    /// returns the receiver.
    ///
    /// This is the default ordering of the contract: `[11, 2, 22, 1]` sorts
    /// to `[1, 11, 2, 22]`. For a value-aware ordering use
    /// [`sort_by`](Sequence::sort_by). The sort is stable.
    pub fn sort(&mut self) -> &mut Self
    where
        T: fmt::Display,
    {
        self.items.sort_by_cached_key(|item| item.to_string());
        self
    }

    /// Sorts the sequence in place with a three-way comparator and returns
    /// the receiver.
    ///
    /// The comparator returns `Less` to put `a` before `b`, `Greater` for the
    /// reverse, and `Equal` for ties. The sort is stable: equal elements keep
    /// their relative input order.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }

    /// Removes `delete_count` elements starting at `start`, inserts
    /// `replacement` in their place, and returns the removed elements as a
    /// new sequence.
    ///
    /// `start` resolves per [`crate::bounds`]; `delete_count` clamps to the
    /// elements available from `start`, and `None` means "through the end".
    /// The number of inserted elements need not match the number removed.
    pub fn splice<I>(&mut self, start: isize, delete_count: Option<usize>, replacement: I) -> Sequence<T>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.items.len();
        let start = bounds::resolve(start, len);
        let deleted = delete_count.map_or(len - start, |n| n.min(len - start));
        let removed: Vec<T> = self
            .items
            .splice(start..start + deleted, replacement)
            .collect();
        Sequence { items: removed }
    }

    /// Returns the lowest index at or after `from` whose element equals
    /// `value`, or `None` if there is no match.
    ///
    /// `from` defaults to 0; a negative `from` counts from the end and floors
    /// at 0. Equality is structural (`PartialEq`).
    pub fn index_of(&self, value: &T, from: Option<isize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let start = bounds::resolve_search_start(from, self.items.len());
        self.items[start..]
            .iter()
            .position(|item| item == value)
            .map(|offset| start + offset)
    }

    /// Returns the highest index at or before `from` whose element equals
    /// `value`, or `None` if there is no match.
    ///
    /// `from` defaults to the last index; a negative `from` counts from the
    /// end, and a position past the end clamps to the last index.
    pub fn last_index_of(&self, value: &T, from: Option<isize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let end = bounds::resolve_search_end(from, self.items.len())?;
        self.items[..=end].iter().rposition(|item| item == value)
    }

    /// Returns `true` iff `predicate` holds for every element.
    ///
    /// Stops at the first element for which the predicate is false. Holds
    /// vacuously on an empty sequence.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Returns `true` iff `predicate` holds for at least one element.
    ///
    /// Stops at the first element for which the predicate is true.
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Invokes `action` once per element in ascending index order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(action);
    }

    /// Builds a new sequence of the same length where the element at each
    /// index is `transform(element, index)`. The receiver is not mutated.
    pub fn map<U, F>(&self, mut transform: F) -> Sequence<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        Sequence {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| transform(item, index))
                .collect(),
        }
    }

    /// Builds a new sequence holding copies of exactly the elements for which
    /// `predicate` is true, in their original order. The receiver is not
    /// mutated.
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Sequence {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Folds the elements left to right, seeded with `init`.
    ///
    /// Total: the fold of an empty sequence is `init`.
    pub fn fold<A, F>(&self, init: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().fold(init, combine)
    }

    /// Folds the elements right to left, seeded with `init`.
    pub fn fold_right<A, F>(&self, init: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().rev().fold(init, combine)
    }

    /// Folds the elements left to right with the first element as the seed.
    ///
    /// Fails with [`ErrorKind::EmptySequence`] if the sequence is empty:
    /// there is no element to seed the accumulator with.
    ///
    /// [`ErrorKind::EmptySequence`]: sable_common::error::ErrorKind::EmptySequence
    pub fn reduce<F>(&self, mut combine: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let (seed, rest) = self
            .items
            .split_first()
            .ok_or_else(|| Error::empty_sequence("reduce"))?;
        Ok(rest
            .iter()
            .fold(seed.clone(), |acc, item| combine(acc, item)))
    }

    /// Folds the elements right to left with the last element as the seed.
    ///
    /// Same empty-sequence failure rule as [`reduce`](Sequence::reduce).
    pub fn reduce_right<F>(&self, mut combine: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let (seed, rest) = self
            .items
            .split_last()
            .ok_or_else(|| Error::empty_sequence("reduce_right"))?;
        Ok(rest
            .iter()
            .rev()
            .fold(seed.clone(), |acc, item| combine(acc, item)))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    /// The textual form of a sequence is the comma join of its elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.iter().format(","))
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    /// Direct element access.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`Sequence::get`] for a checked
    /// lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
