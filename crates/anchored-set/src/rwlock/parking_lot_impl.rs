pub(crate) use parking_lot::{RwLockReadGuard as ReadGuard, RwLockWriteGuard as WriteGuard};


/// `parking_lot`'s locks are not poisoned by panics, so every acquisition simply succeeds.
pub(crate) struct RwLock<T>(parking_lot::RwLock<T>);

impl<T> RwLock<T> {
    #[inline]
    pub(crate) fn new(t: T) -> Self {
        Self(parking_lot::RwLock::new(t))
    }

    #[inline]
    pub(crate) fn read(&self) -> ReadGuard<'_, T> {
        self.0.read()
    }

    #[inline]
    pub(crate) fn write(&self) -> WriteGuard<'_, T> {
        self.0.write()
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T {
        self.0.into_inner()
    }
}
