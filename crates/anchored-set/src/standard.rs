use std::{fmt, mem};
use std::fmt::{Debug, Formatter};

use hashbrown::HashSet;
use tracing::Level as LogLevel;

use crate::{error::ReserveError, interface::{Element, Set}};


/// A [`Set`] without any internal synchronization.
///
/// Membership operations are average O(1), backed by a hash set; exporting the members in
/// ascending order, with [`to_sorted_vec`] or [`clear`], costs O(n log n).
///
/// Mutation requires `&mut self`, so sharing a `StandardSet` between threads only permits
/// reads. Use a [`ThreadsafeSet`] to mutate one set from multiple threads.
///
/// [`to_sorted_vec`]: Set::to_sorted_vec
/// [`clear`]: Set::clear
/// [`ThreadsafeSet`]: crate::ThreadsafeSet
#[derive(Clone)]
pub struct StandardSet<T> {
    contents: HashSet<T>,
}

impl<T: Element> StandardSet<T> {
    /// Create a new, empty `StandardSet`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            contents: HashSet::new(),
        }
    }

    /// Create a new, empty `StandardSet` which can hold at least `capacity` members without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contents: HashSet::with_capacity(capacity),
        }
    }

    /// Create a `StandardSet` whose members are the distinct values of `elements`.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.add(elements);
        set
    }

    /// Get the number of members the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.contents.capacity()
    }

    /// Consume the set, returning its members in strictly ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut results: Vec<T> = self.contents.into_iter().collect();
        // Members are distinct, so an unstable sort yields the same order as a stable one.
        results.sort_unstable();
        results
    }
}

impl<T: Element> Set<T> for StandardSet<T> {
    fn add(&mut self, elements: &[T]) {
        for element in elements {
            self.contents.get_or_insert_with(element, T::clone);
        }
    }

    fn discard(&mut self, elements: &[T]) {
        for element in elements {
            self.contents.remove(element);
        }
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        self.contents.insert(element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.contents.remove(element)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.contents.contains(element)
    }

    fn contains_each(&self, elements: &[T]) -> Vec<bool> {
        elements
            .iter()
            .map(|element| self.contents.contains(element))
            .collect()
    }

    #[inline]
    fn len(&self) -> usize {
        self.contents.len()
    }

    fn to_sorted_vec(&self) -> Vec<T> {
        let mut results: Vec<T> = self.contents.iter().cloned().collect();
        results.sort_unstable();
        results
    }

    fn clear(&mut self) -> Vec<T> {
        let cleared = mem::take(self).into_sorted_vec();
        tracing::event!(LogLevel::TRACE, "cleared {} elements from a set", cleared.len());
        cleared
    }

    #[inline]
    fn reset(&mut self) {
        self.contents = HashSet::new();
    }

    fn reserve(&mut self, size_hint: usize) {
        if let Err(err) = self.try_reserve(size_hint) {
            tracing::event!(LogLevel::DEBUG, "ignoring a set size hint: {err}");
        }
    }

    fn try_reserve(&mut self, size_hint: usize) -> Result<(), ReserveError> {
        let requested = size_hint.max(self.contents.len());
        let old_capacity = self.contents.capacity();

        // Both branches move members into a new table only after it is fully allocated, and the
        // old table is kept if hashing a member panics.
        if requested > old_capacity {
            self.contents
                .try_reserve(requested - self.contents.len())
                .map_err(|err| ReserveError::from_hashbrown(requested, err))?;
        } else {
            self.contents.shrink_to(requested);
        }

        tracing::event!(
            LogLevel::TRACE,
            "resized set storage for a size hint of {size_hint}: capacity {old_capacity} -> {}",
            self.contents.capacity(),
        );
        Ok(())
    }
}

impl<T: Element> Default for StandardSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for StandardSet<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.contents == other.contents
    }
}

impl<T: Element> Eq for StandardSet<T> {}

impl<T: Element> FromIterator<T> for StandardSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            contents: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> Extend<T> for StandardSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.contents.extend(iter);
    }
}

impl<T: Element + Debug> Debug for StandardSet<T> {
    /// Members are listed in ascending order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut members: Vec<&T> = self.contents.iter().collect();
        members.sort_unstable();
        f.debug_set().entries(members).finish()
    }
}
