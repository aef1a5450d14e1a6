//! An owned, growable byte buffer that keeps its content NUL-terminated.
//!
//! [`StrBuf`] replaces, concatenates and appends byte strings, single bytes
//! and numbers, growing its storage as it goes. Bulk operations size the
//! storage exactly; single-byte appends double it. Every operation either
//! succeeds or returns [`StrBufError`] with the buffer untouched, so callers
//! can retry, shrink their input or give up without cleanup.
//!
//! ```rust
//! use strbuf::StrBuf;
//!
//! let mut buf = StrBuf::new();
//! buf.concat("foo", "bar")?;
//! buf.append_float(2.0)?;
//! assert_eq!(buf, "foobar2.000000");
//! assert_eq!(buf.as_c_str(), Some(c"foobar2.000000"));
//! # Ok::<(), strbuf::StrBufError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod format;
mod growth;
mod options;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use buffer::StrBuf;
pub use error::{AllocationFailureCause, ErrorKind, StrBufError};
pub use options::BufferOptions;

/// Result of a fallible [`StrBuf`] operation.
pub type Result<T, E = StrBufError> = core::result::Result<T, E>;
