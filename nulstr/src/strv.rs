use alloc::vec::Vec;

use crate::convert::{make_nulstr, Nulstr};
use crate::error::{try_dup, try_reserve, try_reserve_exact, NulstrError};
use crate::iter::StrvIter;

/// An ordered vector of independently owned byte strings.
///
/// Elements are arbitrary bytes; no encoding is checked. Dropping the `Strv`
/// releases every element together with the container.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Strv {
    items: Vec<Vec<u8>>,
}

impl Strv {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `NulstrError::OutOfMemory` if the slots cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, NulstrError> {
        let mut items = Vec::new();
        try_reserve_exact(&mut items, capacity)?;
        Ok(Self { items })
    }

    /// Appends a copy of `item`.
    ///
    /// # Errors
    ///
    /// Returns `NulstrError::OutOfMemory` if either the copy or the vector
    /// growth fails. The vector is left unchanged in that case.
    pub fn try_extend(&mut self, item: &[u8]) -> Result<(), NulstrError> {
        try_reserve(&mut self.items, 1)?;
        self.items.push(try_dup(item)?);
        Ok(())
    }

    /// Appends an already owned element into capacity reserved by
    /// [`Strv::try_with_capacity`].
    pub(crate) fn push_reserved(&mut self, item: Vec<u8>) {
        debug_assert!(self.items.len() < self.items.capacity());
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.items.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.iter().any(|item| item == needle)
    }

    /// Returns an iterator over the elements in order.
    #[must_use]
    pub fn iter(&self) -> StrvIter<'_> {
        self.into_iter()
    }

    /// Serializes the elements into a nulstr, see [`make_nulstr`].
    ///
    /// # Errors
    ///
    /// Returns `NulstrError::OutOfMemory` if the buffer cannot be grown.
    pub fn to_nulstr(&self) -> Result<Nulstr, NulstrError> {
        make_nulstr(Some(self.items.as_slice()))
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<u8>> {
        self.items
    }
}

impl From<Vec<Vec<u8>>> for Strv {
    fn from(items: Vec<Vec<u8>>) -> Self {
        Self { items }
    }
}

impl<'a> FromIterator<&'a [u8]> for Strv {
    fn from_iter<I: IntoIterator<Item = &'a [u8]>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(<[u8]>::to_vec).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Strv {
    type Item = &'a [u8];
    type IntoIter = StrvIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        StrvIter::new(&self.items)
    }
}

impl IntoIterator for Strv {
    type Item = Vec<u8>;
    type IntoIter = alloc::vec::IntoIter<Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: AsRef<[u8]>> PartialEq<[T]> for Strv {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<T: AsRef<[u8]>, const N: usize> PartialEq<[T; N]> for Strv {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}
