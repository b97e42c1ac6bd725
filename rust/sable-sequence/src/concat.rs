//! Arguments for [`Sequence::concat`].

use crate::sequence::Sequence;

/// A single argument to [`Sequence::concat`].
///
/// An `Item` contributes one element to the result; a `Seq` has its elements
/// spliced in flat, in order. The `From` impls let callers mix the two forms
/// freely:
///
/// ```
/// use sable_sequence::Sequence;
///
/// let head = Sequence::from(vec![1, 2]);
/// let tail = Sequence::from(vec![4, 5]);
/// let all = head.concat([3.into(), tail.into()]);
/// assert_eq!(all.as_slice(), &[1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub enum ConcatPart<T> {
    /// A single element, appended as-is.
    Item(T),
    /// A whole sequence whose elements are appended one by one.
    Seq(Sequence<T>),
}

impl<T> ConcatPart<T> {
    /// Number of elements this part contributes to the result.
    pub fn len(&self) -> usize {
        match self {
            ConcatPart::Item(_) => 1,
            ConcatPart::Seq(seq) => seq.len(),
        }
    }

    /// Returns `true` if this part contributes no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends this part's elements to `target`.
    pub(crate) fn append_into(self, target: &mut Vec<T>) {
        match self {
            ConcatPart::Item(item) => target.push(item),
            ConcatPart::Seq(seq) => target.extend(seq),
        }
    }
}

impl<T> From<T> for ConcatPart<T> {
    fn from(item: T) -> Self {
        ConcatPart::Item(item)
    }
}

impl<T> From<Sequence<T>> for ConcatPart<T> {
    fn from(seq: Sequence<T>) -> Self {
        ConcatPart::Seq(seq)
    }
}

impl<T> From<Vec<T>> for ConcatPart<T> {
    fn from(items: Vec<T>) -> Self {
        ConcatPart::Seq(items.into())
    }
}
