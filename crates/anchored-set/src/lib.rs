#![cfg_attr(test, allow(unused_crate_dependencies, reason = "`oorandom` is only used by tests"))]

mod error;
mod interface;
mod rwlock;

mod standard;
mod threadsafe;


pub use self::{
    error::ReserveError,
    interface::{Element, Set},
    standard::StandardSet,
    threadsafe::ThreadsafeSet,
};


/// A set built by [`new`] or [`from_slice`], which may or may not be threadsafe.
///
/// The box itself can be sent to and read from other threads. To mutate a threadsafe set from
/// several threads at once, share the [`ThreadsafeSet`] returned by [`Set::as_threadsafe`].
pub type BoxedSet<'a, T> = Box<dyn Set<T> + Send + Sync + 'a>;

/// Create a new, empty set.
///
/// If `threadsafe` is true, the set is a [`ThreadsafeSet`]; otherwise, it is a [`StandardSet`].
#[must_use]
pub fn new<'a, T>(threadsafe: bool) -> BoxedSet<'a, T>
where
    T: Element + Send + Sync + 'a,
{
    if threadsafe {
        Box::new(ThreadsafeSet::new())
    } else {
        Box::new(StandardSet::new())
    }
}

/// Create a set whose members are the distinct values of `elements`.
///
/// If `threadsafe` is true, the set is a [`ThreadsafeSet`]; otherwise, it is a [`StandardSet`].
#[must_use]
pub fn from_slice<'a, T>(elements: &[T], threadsafe: bool) -> BoxedSet<'a, T>
where
    T: Element + Send + Sync + 'a,
{
    if threadsafe {
        Box::new(ThreadsafeSet::from_slice(elements))
    } else {
        Box::new(StandardSet::from_slice(elements))
    }
}
