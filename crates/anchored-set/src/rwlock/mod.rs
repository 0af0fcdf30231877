//! The reader-writer lock guarding the contents of a [`ThreadsafeSet`].
//!
//! Every backend exposes the same `RwLock` API: `new`, `read`, `write`, and `into_inner`,
//! none of which can fail.
//!
//! [`ThreadsafeSet`]: crate::ThreadsafeSet

cfg_if::cfg_if! {
    if #[cfg(set_loom)] {
        mod loom_impl;
        pub(crate) use self::loom_impl::*;
    } else if #[cfg(feature = "parking_lot")] {
        mod parking_lot_impl;
        pub(crate) use self::parking_lot_impl::*;
    } else {
        mod std_impl;
        pub(crate) use self::std_impl::*;
    }
}

// Silence unused dependency warning
#[cfg(all(set_loom, feature = "parking_lot"))]
use parking_lot as _;
