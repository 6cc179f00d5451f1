//! Error types shared by the containers of this crate.
//!
//! None of these represent "not found". Searching for something that isn't there returns an end
//! position, [`None`] or `false` instead.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Checked access to an index-based container was attempted with an index outside of
/// `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A length or capacity computation overflowed [`usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A position handle didn't refer to a live element: it was the end position, the element it
/// referred to has been erased, or it came from another list or tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition;

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position doesn't refer to an element of this collection!")
    }
}

impl Error for InvalidPosition {}

/// A strict lookup (such as `at`) was performed on an associative container for a key that it
/// doesn't contain. The missing key is kept for the error message.
pub struct KeyNotFound<'a, Q: ?Sized> {
    /// The key that couldn't be found.
    pub key: &'a Q,
}

impl<Q: Debug + ?Sized> Debug for KeyNotFound<'_, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyNotFound")
            .field("key", &self.key)
            .finish()
    }
}

impl<Q: Debug + ?Sized> Display for KeyNotFound<'_, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {:?} not found in collection!", self.key)
    }
}

impl<Q: Debug + ?Sized> Error for KeyNotFound<'_, Q> {}

/// Failure of a checked insertion: either the index was out of bounds or the resulting length
/// would overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    #[allow(missing_docs)]
    IndexOutOfBounds(IndexOutOfBounds),
    #[allow(missing_docs)]
    CapacityOverflow(CapacityOverflow),
}
