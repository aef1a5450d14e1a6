//! The single capacity rule every mutation funnels through.
//!
//! An operation knows the content length it will produce before it writes a
//! byte. It asks [`ensure_capacity`] for room for that length plus the
//! terminator. Bulk operations grow to exactly that size; single-byte
//! appends double instead so that a loop of them stays linear.
//!
//! Storage is a `Vec<u8>` whose *length* is the logical capacity. The vector
//! is never allowed to pick its own growth, so `capacity` stays exactly what
//! this module decided, independent of the allocator's rounding.

use alloc::vec::Vec;

use crate::{AllocationFailureCause, BufferOptions, StrBufError};

/// How a growth step sizes the new allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    /// Allocate exactly the required number of bytes.
    Exact,
    /// Double the current capacity.
    Doubling,
}

/// What happens to the existing bytes when storage is reallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    /// Appends keep the current content.
    Preserve,
    /// Set/concat overwrite from offset 0, so the old bytes need not move.
    Discard,
}

impl Growth {
    /// The capacity to allocate so that `required` bytes fit, starting from
    /// `capacity`. Only called when `required > capacity`.
    fn target(
        self,
        capacity: usize,
        required: usize,
        options: &BufferOptions,
    ) -> Result<usize, AllocationFailureCause> {
        let target = match self {
            Growth::Exact => required,
            Growth::Doubling if capacity == 0 => options.initial_char_capacity().max(required),
            Growth::Doubling => capacity
                .checked_mul(2)
                .ok_or(AllocationFailureCause::CapacityOverflow)?
                .max(required),
        };

        if target > isize::MAX.unsigned_abs() {
            return Err(AllocationFailureCause::CapacityOverflow);
        }
        match options.max_capacity {
            Some(limit) if target > limit => Err(AllocationFailureCause::LimitExceeded { limit }),
            _ => Ok(target),
        }
    }

    /// The capacity this strategy would request, for error reporting when
    /// computing the real target failed.
    fn attempted(self, capacity: usize, required: usize, options: &BufferOptions) -> usize {
        match self {
            Growth::Exact => required,
            Growth::Doubling if capacity == 0 => options.initial_char_capacity().max(required),
            Growth::Doubling => capacity.saturating_mul(2).max(required),
        }
    }
}

/// Bytes needed to store `len` content bytes plus the terminator.
pub(crate) fn required_for(len: usize) -> Result<usize, StrBufError> {
    len.checked_add(1)
        .ok_or_else(|| StrBufError::new(usize::MAX, AllocationFailureCause::CapacityOverflow))
}

/// Grows `storage` so that it holds at least `required` bytes.
///
/// Does nothing when the current capacity already suffices. On failure
/// `storage` is untouched.
pub(crate) fn ensure_capacity(
    storage: &mut Vec<u8>,
    required: usize,
    growth: Growth,
    contents: Contents,
    options: &BufferOptions,
) -> Result<(), StrBufError> {
    let capacity = storage.len();
    if required <= capacity {
        return Ok(());
    }

    let target = growth.target(capacity, required, options).map_err(|cause| {
        let attempted = growth.attempted(capacity, required, options);
        log::debug!("cannot grow from {capacity} to {attempted} bytes: {cause}");
        StrBufError::new(attempted, cause)
    })?;

    match contents {
        Contents::Preserve => {
            storage.try_reserve_exact(target - capacity).map_err(|_| rejected(capacity, target))?;
            storage.resize(target, 0);
        }
        Contents::Discard => {
            let mut fresh = Vec::new();
            fresh.try_reserve_exact(target).map_err(|_| rejected(capacity, target))?;
            fresh.resize(target, 0);
            *storage = fresh;
        }
    }

    log::trace!("grew from {capacity} to {target} bytes ({growth:?}, {contents:?})");
    Ok(())
}

fn rejected(capacity: usize, target: usize) -> StrBufError {
    log::debug!("allocator rejected growth from {capacity} to {target} bytes");
    StrBufError::new(target, AllocationFailureCause::AllocatorRejected)
}
