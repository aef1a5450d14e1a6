use thiserror::Error;

/// Classification of a [`StrBufError`].
///
/// Growth can only fail in one way from the caller's point of view, so there
/// is a single kind. The finer-grained reason lives in
/// [`AllocationFailureCause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The buffer could not obtain the storage an operation needed.
    AllocationFailure,
}

/// Why a growth step could not obtain storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationFailureCause {
    /// The required size does not fit in `usize`, or exceeds `isize::MAX`
    /// bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The global allocator refused the request.
    #[error("allocator rejected the request")]
    AllocatorRejected,
    /// The request exceeds [`BufferOptions::max_capacity`].
    ///
    /// [`BufferOptions::max_capacity`]: crate::BufferOptions::max_capacity
    #[error("exceeds the configured limit of {limit} bytes")]
    LimitExceeded {
        /// The configured maximum capacity.
        limit: usize,
    },
}

/// Error returned by every fallible [`StrBuf`](crate::StrBuf) operation.
///
/// When an operation returns this error the buffer is exactly as it was
/// before the call: same content, same length, same capacity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("allocation failure: cannot grow to {requested} bytes ({cause})")]
pub struct StrBufError {
    requested: usize,
    #[source]
    cause: AllocationFailureCause,
}

impl StrBufError {
    pub(crate) fn new(requested: usize, cause: AllocationFailureCause) -> Self {
        Self { requested, cause }
    }

    /// Always [`ErrorKind::AllocationFailure`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::AllocationFailure
    }

    /// The capacity, in bytes, that the failed growth step asked for.
    ///
    /// For requests too large to represent this saturates at `usize::MAX`.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// The underlying reason for the failure.
    #[must_use]
    pub fn cause(&self) -> AllocationFailureCause {
        self.cause
    }
}
