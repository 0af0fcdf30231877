use std::hash::Hash;

use crate::{error::ReserveError, threadsafe::ThreadsafeSet};


/// The requirements on a value stored in a [`Set`].
///
/// `Ord` provides the total order used by every export of a set, `Hash` (together with the `Eq`
/// implied by `Ord`) lets the value act as a lookup key, and `Clone` lets snapshots own their
/// contents independently of the set they came from.
///
/// Implemented for every type satisfying those bounds.
pub trait Element: Ord + Hash + Clone {}

impl<T: Ord + Hash + Clone> Element for T {}

/// A collection of unique [`Element`]s, whose contents are always exported in ascending order.
///
/// Implementations may or may not be threadsafe. A [`ThreadsafeSet`] additionally exposes every
/// method through `&self`, and `&ThreadsafeSet<T>` implements `Set<T>` as well, so that a single
/// threadsafe set can be mutated by many threads at once.
///
/// Operations are total: adding a present element, discarding an absent element, or clearing an
/// empty set are all no-ops rather than errors.
pub trait Set<T: Element> {
    /// Insert each of the provided `elements` which is not already in the set.
    ///
    /// Duplicates, whether within `elements` or with existing members, are collapsed.
    fn add(&mut self, elements: &[T]);

    /// Remove each of the provided `elements` which is in the set.
    fn discard(&mut self, elements: &[T]);

    /// Insert a single element, returning `true` if it was not already present.
    fn insert(&mut self, element: T) -> bool;

    /// Remove a single element, returning `true` if it was present.
    fn remove(&mut self, element: &T) -> bool;

    /// Check whether `element` is currently a member of the set.
    #[must_use]
    fn contains(&self, element: &T) -> bool;

    /// Check the membership of each of the provided `elements`, in the order given.
    #[must_use]
    fn contains_each(&self, elements: &[T]) -> Vec<bool>;

    /// Get the number of members of the set.
    #[must_use]
    fn len(&self) -> usize;

    /// Determine whether the set has no members.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a snapshot of the members of the set, in strictly ascending order.
    ///
    /// The returned `Vec` is independent of the set; later mutations of the set do not affect it.
    #[must_use]
    fn to_sorted_vec(&self) -> Vec<T>;

    /// Empty the set, returning a snapshot of the members it had, in strictly ascending order.
    ///
    /// No other operation is observed between taking the snapshot and emptying the set.
    fn clear(&mut self) -> Vec<T>;

    /// Empty the set, without producing a snapshot of its members.
    fn reset(&mut self);

    /// Resize the storage of the set so that it can hold at least `size_hint` members
    /// (or its current number of members, if that is larger) without reallocating. Storage
    /// beyond that may be released.
    ///
    /// The hint is advisory. This never changes the members of the set, only the cost of later
    /// insertions, and a hint whose storage cannot be allocated is ignored.
    fn reserve(&mut self, size_hint: usize);

    /// Like [`reserve`], but reports a hint whose storage cannot be allocated instead of
    /// ignoring it.
    ///
    /// If an error is returned, the members and storage of the set are unchanged.
    ///
    /// [`reserve`]: Set::reserve
    fn try_reserve(&mut self, size_hint: usize) -> Result<(), ReserveError>;

    /// Get the [`ThreadsafeSet`] behind this set, if it is one.
    ///
    /// Useful for sharing a set obtained from [`new`] or [`from_slice`] between threads.
    ///
    /// [`new`]: crate::new
    /// [`from_slice`]: crate::from_slice
    #[inline]
    #[must_use]
    fn as_threadsafe(&self) -> Option<&ThreadsafeSet<T>> {
        None
    }

    /// Determine whether this set synchronizes its operations.
    #[inline]
    #[must_use]
    fn is_threadsafe(&self) -> bool {
        self.as_threadsafe().is_some()
    }
}

impl<T: Element, S: ?Sized + Set<T>> Set<T> for Box<S> {
    #[inline]
    fn add(&mut self, elements: &[T]) {
        S::add(self, elements);
    }

    #[inline]
    fn discard(&mut self, elements: &[T]) {
        S::discard(self, elements);
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        S::insert(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        S::remove(self, element)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        S::contains(self, element)
    }

    #[inline]
    fn contains_each(&self, elements: &[T]) -> Vec<bool> {
        S::contains_each(self, elements)
    }

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        S::is_empty(self)
    }

    #[inline]
    fn to_sorted_vec(&self) -> Vec<T> {
        S::to_sorted_vec(self)
    }

    #[inline]
    fn clear(&mut self) -> Vec<T> {
        S::clear(self)
    }

    #[inline]
    fn reset(&mut self) {
        S::reset(self);
    }

    #[inline]
    fn reserve(&mut self, size_hint: usize) {
        S::reserve(self, size_hint);
    }

    #[inline]
    fn try_reserve(&mut self, size_hint: usize) -> Result<(), ReserveError> {
        S::try_reserve(self, size_hint)
    }

    #[inline]
    fn as_threadsafe(&self) -> Option<&ThreadsafeSet<T>> {
        S::as_threadsafe(self)
    }
}
