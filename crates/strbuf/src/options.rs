/// Configuration for a [`StrBuf`](crate::StrBuf).
///
/// # Examples
///
/// ```rust
/// use strbuf::{BufferOptions, StrBuf};
///
/// let mut buf = StrBuf::with_options(BufferOptions {
///     max_capacity: Some(8),
///     ..Default::default()
/// });
/// buf.set("hello").unwrap();
/// assert!(buf.append(" world").is_err());
/// assert_eq!(buf, "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Upper bound on the buffer's capacity in bytes, terminator included.
    ///
    /// Any growth step that would allocate more fails with
    /// [`AllocationFailureCause::LimitExceeded`] and leaves the buffer
    /// untouched. Growth is never clamped to the limit.
    ///
    /// # Default
    ///
    /// `None`
    ///
    /// [`AllocationFailureCause::LimitExceeded`]: crate::AllocationFailureCause::LimitExceeded
    pub max_capacity: Option<usize>,

    /// Capacity allocated by [`StrBuf::append_char`] when the buffer has no
    /// storage yet.
    ///
    /// Doubling a capacity of zero never makes room, so the first
    /// single-byte append allocates this many bytes instead; later appends
    /// double from there. Values below `2` are raised to `2`, the minimum
    /// that fits one byte plus the terminator.
    ///
    /// # Default
    ///
    /// `16`
    ///
    /// [`StrBuf::append_char`]: crate::StrBuf::append_char
    pub min_char_capacity: usize,
}

impl BufferOptions {
    pub(crate) const MIN_CHAR_CAPACITY_FLOOR: usize = 2;

    pub(crate) fn initial_char_capacity(&self) -> usize {
        self.min_char_capacity.max(Self::MIN_CHAR_CAPACITY_FLOOR)
    }
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            max_capacity: None,
            min_char_capacity: 16,
        }
    }
}
