use std::sync::{LockResult, PoisonError, RwLock as StdRwLock};

use tracing::Level as LogLevel;

pub(crate) use std::sync::{RwLockReadGuard as ReadGuard, RwLockWriteGuard as WriteGuard};


/// A `std` lock whose poison is cleared and ignored.
///
/// A panic while the lock is held can only come from an element's `Hash`, `Ord`, or `Clone`
/// impl. The protected set is still a valid set afterwards, though the interrupted operation may
/// have been partly applied (for instance, `add` may have inserted a prefix of its elements).
pub(crate) struct RwLock<T>(StdRwLock<T>);

impl<T> RwLock<T> {
    #[inline]
    pub(crate) fn new(t: T) -> Self {
        Self(StdRwLock::new(t))
    }

    #[inline]
    pub(crate) fn read(&self) -> ReadGuard<'_, T> {
        self.recover(self.0.read())
    }

    #[inline]
    pub(crate) fn write(&self) -> WriteGuard<'_, T> {
        self.recover(self.0.write())
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn recover<Guard>(&self, lock_result: LockResult<Guard>) -> Guard {
        lock_result.unwrap_or_else(|poison| {
            tracing::event!(
                LogLevel::DEBUG,
                "recovering a ThreadsafeSet lock that was poisoned by a panicking thread",
            );
            self.0.clear_poison();
            poison.into_inner()
        })
    }
}
