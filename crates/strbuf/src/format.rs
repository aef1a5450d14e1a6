//! Stack scratch space for rendering numbers before they are appended.
//!
//! Numbers are rendered in full first and appended with one bulk call, so a
//! failed append never leaves half a number behind.
use core::fmt::{self, Write};

/// `i64::MIN` renders as 20 bytes.
const INT_SCRATCH: usize = 24;

/// `-f64::MAX` with six fractional digits renders as 317 bytes.
const FLOAT_SCRATCH: usize = 320;

/// Fixed-size byte buffer that accepts formatted text.
pub(crate) struct Scratch<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Scratch<N> {
    fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> Write for Scratch<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Base-10 text: optional `-`, no grouping, no leading zeros.
pub(crate) fn int_text(value: i64) -> Scratch<INT_SCRATCH> {
    let mut scratch = Scratch::new();
    let written = write!(scratch, "{value}");
    debug_assert!(written.is_ok(), "integer text exceeds scratch space");
    scratch
}

/// Fixed-point text with exactly six fractional digits.
///
/// Non-finite values follow the C conventions: `nan`, `-nan`, `inf`, `-inf`.
pub(crate) fn float_text(value: f64) -> Scratch<FLOAT_SCRATCH> {
    let mut scratch = Scratch::new();
    let written = if value.is_nan() {
        scratch.write_str(if value.is_sign_negative() { "-nan" } else { "nan" })
    } else {
        write!(scratch, "{value:.6}")
    };
    debug_assert!(written.is_ok(), "float text exceeds scratch space");
    scratch
}

#[cfg(test)]
mod tests {
    use super::{float_text, int_text};

    #[test]
    fn integer_extremes() {
        assert_eq!(int_text(0).as_bytes(), b"0");
        assert_eq!(int_text(-42).as_bytes(), b"-42");
        assert_eq!(int_text(i64::MIN).as_bytes(), b"-9223372036854775808");
        assert_eq!(int_text(i64::MAX).as_bytes(), b"9223372036854775807");
    }

    #[test]
    fn float_fixed_point() {
        assert_eq!(float_text(3.5).as_bytes(), b"3.500000");
        assert_eq!(float_text(-0.0).as_bytes(), b"-0.000000");
        assert_eq!(float_text(f64::INFINITY).as_bytes(), b"inf");
        assert_eq!(float_text(f64::NEG_INFINITY).as_bytes(), b"-inf");
        assert_eq!(float_text(f64::NAN).as_bytes(), b"nan");
        assert_eq!(float_text(-f64::NAN).as_bytes(), b"-nan");
    }

    #[test]
    fn largest_float_fits() {
        let text = float_text(-f64::MAX);
        assert_eq!(text.as_bytes().len(), 317);
        assert!(text.as_bytes().starts_with(b"-17976931348623157"));
        assert!(text.as_bytes().ends_with(b".000000"));
    }
}
