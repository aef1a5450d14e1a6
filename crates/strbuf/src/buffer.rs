use alloc::vec::Vec;
use core::{ffi::CStr, fmt};

use bstr::{BStr, ByteSlice};

use crate::{
    AllocationFailureCause, BufferOptions, Result, StrBufError,
    format::{float_text, int_text},
    growth::{Contents, Growth, ensure_capacity, required_for},
};

/// An owned byte buffer that always keeps a zero byte after its content.
///
/// `StrBuf` starts empty with no storage. Every mutation computes the length
/// it will produce, grows the storage if needed and then writes the bytes and
/// the terminator. Bulk operations grow to exactly the size they need;
/// [`append_char`](Self::append_char) doubles the capacity instead.
///
/// Every mutation either succeeds or fails with [`StrBufError`] and leaves
/// the buffer exactly as it was.
///
/// Operations come in two flavours:
///
/// - *bounded* operations (`*_bounded`) copy the whole byte slice they are
///   given, including any zero bytes inside it;
/// - the others treat their input as terminated by its first zero byte, or by
///   its end if it has none. They are a convenience for text and are not
///   binary-safe.
///
/// # Examples
///
/// ```rust
/// use strbuf::StrBuf;
///
/// let mut buf = StrBuf::new();
/// buf.set("answer: ")?;
/// buf.append_int(42)?;
/// buf.append_char(b'!')?;
/// assert_eq!(buf, "answer: 42!");
/// assert_eq!(buf.as_bytes_with_nul(), b"answer: 42!\0");
/// # Ok::<(), strbuf::StrBufError>(())
/// ```
pub struct StrBuf {
    /// `storage.len()` is the capacity. `storage[len]` is the terminator
    /// whenever storage is non-empty.
    storage: Vec<u8>,
    len: usize,
    options: BufferOptions,
}

impl StrBuf {
    /// Creates an empty buffer with no storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    /// Creates an empty buffer with no storage and the given options.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
            options,
        }
    }

    /// Creates an empty buffer holding exactly `capacity` bytes of storage.
    ///
    /// A capacity of zero gives the same buffer as [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = Self::new();
        ensure_capacity(
            &mut buf.storage,
            capacity,
            Growth::Exact,
            Contents::Discard,
            &buf.options,
        )?;
        Ok(buf)
    }

    /// Creates a buffer holding a copy of `bytes`, sized exactly to fit.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot be allocated.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut buf = Self::new();
        buf.set_bounded(bytes)?;
        Ok(buf)
    }

    /// Replaces the content with `content` up to its first zero byte.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn set(&mut self, content: impl AsRef<[u8]>) -> Result<()> {
        self.set_bounded(until_nul(content.as_ref()))
    }

    /// Replaces the content with every byte of `content`.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn set_bounded(&mut self, content: &[u8]) -> Result<()> {
        self.replace(content, &[])
    }

    /// Replaces the content with `first` followed by `second`, each taken up
    /// to its first zero byte.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn concat(&mut self, first: impl AsRef<[u8]>, second: impl AsRef<[u8]>) -> Result<()> {
        self.replace(until_nul(first.as_ref()), until_nul(second.as_ref()))
    }

    /// Replaces the content with every byte of `first` followed by every byte
    /// of `second`.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn concat_bounded(&mut self, first: &[u8], second: &[u8]) -> Result<()> {
        self.replace(first, second)
    }

    /// Appends `content` up to its first zero byte.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn append(&mut self, content: impl AsRef<[u8]>) -> Result<()> {
        self.append_bounded(until_nul(content.as_ref()))
    }

    /// Appends every byte of `content`.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn append_bounded(&mut self, content: &[u8]) -> Result<()> {
        let new_len = checked_len(self.len, content.len())?;
        self.reserve(new_len, Growth::Exact, Contents::Preserve)?;

        self.storage[self.len..new_len].copy_from_slice(content);
        self.terminate(new_len);
        Ok(())
    }

    /// Appends a single byte.
    ///
    /// When the buffer is full the capacity doubles rather than growing by
    /// one. A buffer with no storage first allocates
    /// [`BufferOptions::min_char_capacity`] bytes.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn append_char(&mut self, c: u8) -> Result<()> {
        let new_len = checked_len(self.len, 1)?;
        self.reserve(new_len, Growth::Doubling, Contents::Preserve)?;

        self.storage[self.len] = c;
        self.terminate(new_len);
        Ok(())
    }

    /// Appends `value` in base 10, e.g. `-42`.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn append_int(&mut self, value: i64) -> Result<()> {
        self.append_bounded(int_text(value).as_bytes())
    }

    /// Appends `value` in fixed-point notation with six fractional digits,
    /// e.g. `3.500000`.
    ///
    /// Non-finite values are written as `nan`, `-nan`, `inf` or `-inf`.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot grow; the buffer is left unchanged.
    pub fn append_float(&mut self, value: f64) -> Result<()> {
        self.append_bounded(float_text(value).as_bytes())
    }

    /// Frees the storage and returns the buffer to its empty state.
    ///
    /// Releasing an already empty buffer does nothing. The buffer can be used
    /// again afterwards. Dropping a `StrBuf` frees its storage as well, so
    /// calling this is only needed to reuse or reset a buffer.
    pub fn release(&mut self) {
        if !self.storage.is_empty() {
            log::trace!("releasing {} bytes", self.storage.len());
        }
        self.storage = Vec::new();
        self.len = 0;
    }

    /// Number of content bytes, not counting the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes of storage, including the terminator's slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The options this buffer was created with.
    #[must_use]
    pub fn options(&self) -> &BufferOptions {
        &self.options
    }

    /// The content, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The content followed by its terminator.
    ///
    /// A buffer without storage still yields `b"\0"`.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.storage.is_empty() {
            b"\0"
        } else {
            &self.storage[..=self.len]
        }
    }

    /// The content as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// The content as a C string, or `None` if it contains a zero byte.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).ok()
    }

    /// Checks every structural invariant, returning the first violation.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn check_invariants(&self) -> core::result::Result<(), &'static str> {
        if self.storage.is_empty() {
            if self.len != 0 {
                return Err("buffer without storage has content");
            }
            return Ok(());
        }
        if self.len >= self.storage.len() {
            return Err("no room for the terminator");
        }
        if self.storage[self.len] != 0 {
            return Err("terminator missing");
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &[u8] {
        &self.storage
    }

    /// Shared body of the set and concat operations.
    fn replace(&mut self, first: &[u8], second: &[u8]) -> Result<()> {
        let new_len = checked_len(first.len(), second.len())?;
        self.reserve(new_len, Growth::Exact, Contents::Discard)?;

        let (head, tail) = self.storage.split_at_mut(first.len());
        head.copy_from_slice(first);
        tail[..second.len()].copy_from_slice(second);
        self.terminate(new_len);
        Ok(())
    }

    fn reserve(&mut self, new_len: usize, growth: Growth, contents: Contents) -> Result<()> {
        let required = required_for(new_len)?;
        ensure_capacity(&mut self.storage, required, growth, contents, &self.options)
    }

    fn terminate(&mut self, new_len: usize) {
        self.storage[new_len] = 0;
        self.len = new_len;
    }
}

fn checked_len(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b)
        .ok_or_else(|| StrBufError::new(usize::MAX, AllocationFailureCause::CapacityOverflow))
}

/// The prefix of `bytes` before its first zero byte.
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.find_byte(0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf")
            .field("content", &self.as_bstr())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

/// Appends through [`append_bounded`](StrBuf::append_bounded). A failed
/// allocation surfaces as [`fmt::Error`]; earlier `write_str` calls of the
/// same `write!` stay applied.
impl fmt::Write for StrBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_bounded(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for StrBuf {
    type Error = StrBufError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_bytes(bytes)
    }
}

impl TryFrom<&str> for StrBuf {
    type Error = StrBufError;

    fn try_from(text: &str) -> Result<Self> {
        Self::try_from_bytes(text.as_bytes())
    }
}

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}

impl PartialEq<[u8]> for StrBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for StrBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for StrBuf {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for StrBuf {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for StrBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StrBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
