#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strbuf::{BufferOptions, StrBuf};

#[derive(Arbitrary, Debug)]
enum Op {
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

#[derive(Arbitrary, Debug)]
struct Input {
    max_capacity: Option<u16>,
    min_char_capacity: u8,
    ops: Vec<Op>,
}

fn apply(buf: &mut StrBuf, op: &Op) -> strbuf::Result<()> {
    match op {
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

fn run(input: &Input) {
    let mut buf = StrBuf::with_options(BufferOptions {
        max_capacity: input.max_capacity.map(usize::from),
        min_char_capacity: usize::from(input.min_char_capacity),
    });

    for op in &input.ops {
        let before = buf.as_bytes_with_nul().to_vec();
        let capacity = buf.capacity();

        match apply(&mut buf, op) {
            Ok(()) => {
                if !matches!(op, Op::Release) {
                    assert!(buf.capacity() >= capacity, "capacity shrank on {op:?}");
                }
                if let Some(limit) = input.max_capacity {
                    assert!(buf.capacity() <= usize::from(limit), "limit exceeded on {op:?}");
                }
            }
            Err(err) => {
                assert_eq!(buf.as_bytes_with_nul(), before.as_slice(), "{err} changed content");
                assert_eq!(buf.capacity(), capacity, "{err} changed capacity");
            }
        }

        if let Err(violation) = buf.check_invariants() {
            panic!("{violation} after {op:?}");
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(input) = Input::arbitrary(&mut u) {
        run(&input);
    }
});
