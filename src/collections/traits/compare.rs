use std::cmp::Ordering;

/// A strict weak ordering over values of type `T`.
///
/// `less(a, b)` must return true if and only if `a` strictly precedes `b`. Two values are
/// equivalent when neither precedes the other. It is a logic error for an implementation to be
/// inconsistent (for example, `less(a, a)` returning true): containers and algorithms relying on
/// it won't detect this and will produce unspecified (but memory safe) results.
///
/// Any closure of the form `Fn(&T, &T) -> bool` is a comparator.
///
/// # Examples
/// ```
/// # use standard_collections::collections::traits::{Compare, Greater, Less};
/// assert!(Less.less(&1, &2));
/// assert!(Greater.less(&2, &1));
/// assert!((|a: &i32, b: &i32| a.abs() < b.abs()).equivalent(&-3, &3));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` strictly precedes `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value precedes the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Produces the [`Ordering`] of `a` relative to `b` implied by this comparator.
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The natural (ascending) ordering of a type implementing [`Ord`]. This is the default comparator
/// for all ordered collections and sorting algorithms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse (descending) ordering of a type implementing [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
