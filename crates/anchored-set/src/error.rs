use hashbrown::TryReserveError;
use thiserror::Error;


/// An error from [`Set::try_reserve`], returned when the storage of a set could not be rebuilt
/// with the requested capacity.
///
/// [`Set::try_reserve`]: crate::Set::try_reserve
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReserveError {
    /// The requested capacity overflowed the maximum size of a set's storage.
    #[error("cannot reserve space for {requested} elements in a set: capacity overflow")]
    CapacityOverflow {
        requested: usize,
    },
    /// The allocator failed to provide storage for the requested capacity.
    #[error("cannot reserve space for {requested} elements in a set: failed to allocate {bytes} bytes")]
    AllocError {
        requested: usize,
        bytes:     usize,
    },
}

impl ReserveError {
    /// The capacity whose reservation failed.
    #[inline]
    #[must_use]
    pub const fn requested(&self) -> usize {
        match self {
            Self::CapacityOverflow { requested } | Self::AllocError { requested, .. } => *requested,
        }
    }

    pub(crate) fn from_hashbrown(requested: usize, err: TryReserveError) -> Self {
        match err {
            TryReserveError::CapacityOverflow => Self::CapacityOverflow { requested },
            TryReserveError::AllocError { layout } => Self::AllocError {
                requested,
                bytes: layout.size(),
            },
        }
    }
}
