use alloc::{format, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{Result, StrBuf};

/// One mutating call on a [`StrBuf`], with its inputs.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Set(Vec<u8>),
    SetBounded(Vec<u8>),
    Concat(Vec<u8>, Vec<u8>),
    ConcatBounded(Vec<u8>, Vec<u8>),
    Append(Vec<u8>),
    AppendBounded(Vec<u8>),
    AppendChar(u8),
    AppendInt(i64),
    AppendFloat(f64),
    Release,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 10 {
            0 => Op::Set(Vec::arbitrary(g)),
            1 => Op::SetBounded(Vec::arbitrary(g)),
            2 => Op::Concat(Vec::arbitrary(g), Vec::arbitrary(g)),
            3 => Op::ConcatBounded(Vec::arbitrary(g), Vec::arbitrary(g)),
            4 => Op::Append(Vec::arbitrary(g)),
            5 => Op::AppendBounded(Vec::arbitrary(g)),
            // Weighted so geometric growth actually happens.
            6 | 7 => Op::AppendChar(u8::arbitrary(g)),
            8 => {
                if bool::arbitrary(g) {
                    Op::AppendInt(i64::arbitrary(g))
                } else {
                    Op::AppendFloat(f64::arbitrary(g))
                }
            }
            _ => Op::Release,
        }
    }
}

impl Op {
    pub(crate) fn apply(&self, buf: &mut StrBuf) -> Result<()> {
        match self {
            Op::Set(s) => buf.set(s),
            Op::SetBounded(s) => buf.set_bounded(s),
            Op::Concat(a, b) => buf.concat(a, b),
            Op::ConcatBounded(a, b) => buf.concat_bounded(a, b),
            Op::Append(s) => buf.append(s),
            Op::AppendBounded(s) => buf.append_bounded(s),
            Op::AppendChar(c) => buf.append_char(*c),
            Op::AppendInt(i) => buf.append_int(*i),
            Op::AppendFloat(d) => buf.append_float(*d),
            Op::Release => {
                buf.release();
                Ok(())
            }
        }
    }

    /// The content a successful `apply` leaves behind, given the content
    /// before the call.
    pub(crate) fn expected(&self, before: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Op::Set(s) => out.extend_from_slice(until_nul(s)),
            Op::SetBounded(s) => out.extend_from_slice(s),
            Op::Concat(a, b) => {
                out.extend_from_slice(until_nul(a));
                out.extend_from_slice(until_nul(b));
            }
            Op::ConcatBounded(a, b) => {
                out.extend_from_slice(a);
                out.extend_from_slice(b);
            }
            Op::Append(s) => {
                out.extend_from_slice(before);
                out.extend_from_slice(until_nul(s));
            }
            Op::AppendBounded(s) => {
                out.extend_from_slice(before);
                out.extend_from_slice(s);
            }
            Op::AppendChar(c) => {
                out.extend_from_slice(before);
                out.push(*c);
            }
            Op::AppendInt(i) => {
                out.extend_from_slice(before);
                out.extend_from_slice(format!("{i}").as_bytes());
            }
            Op::AppendFloat(d) => {
                out.extend_from_slice(before);
                out.extend_from_slice(c_fixed_point(*d).as_bytes());
            }
            Op::Release => {}
        }
        out
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

/// `printf("%f", d)` as a C library would render it.
pub(crate) fn c_fixed_point(d: f64) -> String {
    match d {
        d if d.is_nan() && d.is_sign_negative() => "-nan".into(),
        d if d.is_nan() => "nan".into(),
        d => format!("{d:.6}"),
    }
}
