use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    error::ReserveError,
    interface::{Element, Set},
    rwlock::{ReadGuard, RwLock, WriteGuard},
    standard::StandardSet,
};


/// A [`Set`] which may be read and mutated from multiple threads at once.
///
/// A `ThreadsafeSet` owns a single [`StandardSet`] behind a reader-writer lock. Operations which
/// only read the set take the lock in shared mode, so any number of them may run concurrently;
/// operations which mutate the set take it in exclusive mode. The lock is held for exactly the
/// duration of one operation, so every operation is linearizable.
///
/// Every method of [`Set`] is available here through `&self`, and `&ThreadsafeSet<T>` is itself
/// a `Set<T>`. Share a `ThreadsafeSet` between threads by reference (for instance, with
/// [`std::thread::scope`]) or in an [`Arc`].
///
/// # Deadlocks
/// The lock is never held while calling back into user code, aside from the `Hash`, `Ord`, and
/// `Clone` implementations of `T`. Those must not access the same `ThreadsafeSet`.
///
/// [`Arc`]: std::sync::Arc
pub struct ThreadsafeSet<T> {
    contents: RwLock<StandardSet<T>>,
}

impl<T: Element> ThreadsafeSet<T> {
    /// Create a new, empty `ThreadsafeSet`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(StandardSet::new())
    }

    /// Create a new, empty `ThreadsafeSet` which can hold at least `capacity` members without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(StandardSet::with_capacity(capacity))
    }

    /// Create a `ThreadsafeSet` whose members are the distinct values of `elements`.
    #[inline]
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self::from(StandardSet::from_slice(elements))
    }

    /// Unwrap the `StandardSet` protected by this `ThreadsafeSet`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> StandardSet<T> {
        self.contents.into_inner()
    }

    #[inline]
    fn read(&self) -> ReadGuard<'_, StandardSet<T>> {
        self.contents.read()
    }

    #[inline]
    fn write(&self) -> WriteGuard<'_, StandardSet<T>> {
        self.contents.write()
    }
}

impl<T: Element> ThreadsafeSet<T> {
    /// See [`Set::add`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn add(&self, elements: &[T]) {
        self.write().add(elements);
    }

    /// See [`Set::discard`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn discard(&self, elements: &[T]) {
        self.write().discard(elements);
    }

    /// See [`Set::insert`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn insert(&self, element: T) -> bool {
        self.write().insert(element)
    }

    /// See [`Set::remove`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn remove(&self, element: &T) -> bool {
        self.write().remove(element)
    }

    /// See [`Set::contains`]. Takes the lock in shared mode.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.read().contains(element)
    }

    /// See [`Set::contains_each`]. Takes the lock in shared mode, so the result reflects a
    /// single point in time.
    #[inline]
    #[must_use]
    pub fn contains_each(&self, elements: &[T]) -> Vec<bool> {
        self.read().contains_each(elements)
    }

    /// See [`Set::len`]. Takes the lock in shared mode.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// See [`Set::is_empty`]. Takes the lock in shared mode.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// See [`Set::to_sorted_vec`]. Takes the lock in shared mode, and copies the members
    /// before releasing it.
    #[inline]
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.read().to_sorted_vec()
    }

    /// See [`Set::clear`]. Takes the lock in exclusive mode, and holds it across both taking the
    /// snapshot and emptying the set.
    #[inline]
    pub fn clear(&self) -> Vec<T> {
        self.write().clear()
    }

    /// See [`Set::reset`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn reset(&self) {
        self.write().reset();
    }

    /// See [`Set::reserve`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn reserve(&self, size_hint: usize) {
        self.write().reserve(size_hint);
    }

    /// See [`Set::try_reserve`]. Takes the lock in exclusive mode.
    #[inline]
    pub fn try_reserve(&self, size_hint: usize) -> Result<(), ReserveError> {
        self.write().try_reserve(size_hint)
    }

    /// Get the number of members the set can hold without reallocating.
    /// Takes the lock in shared mode.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }
}

/// Forwards `Set` methods to the inherent `&self` methods of `ThreadsafeSet`, relying on deref
/// coercion of `self`.
macro_rules! forward_set_methods {
    () => {
        #[inline]
        fn add(&mut self, elements: &[T]) {
            ThreadsafeSet::<T>::add(self, elements);
        }

        #[inline]
        fn discard(&mut self, elements: &[T]) {
            ThreadsafeSet::<T>::discard(self, elements);
        }

        #[inline]
        fn insert(&mut self, element: T) -> bool {
            ThreadsafeSet::<T>::insert(self, element)
        }

        #[inline]
        fn remove(&mut self, element: &T) -> bool {
            ThreadsafeSet::<T>::remove(self, element)
        }

        #[inline]
        fn contains(&self, element: &T) -> bool {
            ThreadsafeSet::<T>::contains(self, element)
        }

        #[inline]
        fn contains_each(&self, elements: &[T]) -> Vec<bool> {
            ThreadsafeSet::<T>::contains_each(self, elements)
        }

        #[inline]
        fn len(&self) -> usize {
            ThreadsafeSet::<T>::len(self)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            ThreadsafeSet::<T>::is_empty(self)
        }

        #[inline]
        fn to_sorted_vec(&self) -> Vec<T> {
            ThreadsafeSet::<T>::to_sorted_vec(self)
        }

        #[inline]
        fn clear(&mut self) -> Vec<T> {
            ThreadsafeSet::<T>::clear(self)
        }

        #[inline]
        fn reset(&mut self) {
            ThreadsafeSet::<T>::reset(self);
        }

        #[inline]
        fn reserve(&mut self, size_hint: usize) {
            ThreadsafeSet::<T>::reserve(self, size_hint);
        }

        #[inline]
        fn try_reserve(&mut self, size_hint: usize) -> Result<(), ReserveError> {
            ThreadsafeSet::<T>::try_reserve(self, size_hint)
        }

        #[inline]
        fn as_threadsafe(&self) -> Option<&ThreadsafeSet<T>> {
            let this: &ThreadsafeSet<T> = self;
            Some(this)
        }
    };
}

impl<T: Element> Set<T> for ThreadsafeSet<T> {
    forward_set_methods!();
}

impl<T: Element> Set<T> for &ThreadsafeSet<T> {
    forward_set_methods!();
}

impl<T: Element> Default for ThreadsafeSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> From<StandardSet<T>> for ThreadsafeSet<T> {
    #[inline]
    fn from(set: StandardSet<T>) -> Self {
        Self {
            contents: RwLock::new(set),
        }
    }
}

impl<T: Element> FromIterator<T> for ThreadsafeSet<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<StandardSet<T>>())
    }
}

impl<T: Element> Extend<T> for ThreadsafeSet<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.write().extend(iter);
    }
}

impl<T: Element + Debug> Debug for ThreadsafeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ThreadsafeSet")
            .field("contents", &*self.read())
            .finish()
    }
}
