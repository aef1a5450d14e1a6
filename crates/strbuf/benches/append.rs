#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use strbuf::StrBuf;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [64usize, 4096, 65_536] {
        let input = vec![b'x'; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("append_char", size), &input, |b, input| {
            b.iter(|| {
                let mut buf = StrBuf::new();
                for &byte in input {
                    buf.append_char(byte).unwrap();
                }
                black_box(buf)
            });
        });

        group.bench_with_input(BenchmarkId::new("append_bounded_chunks", size), &input, |b, input| {
            b.iter(|| {
                let mut buf = StrBuf::new();
                for chunk in input.chunks(16) {
                    buf.append_bounded(chunk).unwrap();
                }
                black_box(buf)
            });
        });

        group.bench_with_input(BenchmarkId::new("set_bounded", size), &input, |b, input| {
            b.iter(|| {
                let mut buf = StrBuf::new();
                buf.set_bounded(input).unwrap();
                black_box(buf)
            });
        });
    }

    group.finish();
}

fn bench_numbers(c: &mut Criterion) {
    c.bench_function("append_int_and_float", |b| {
        b.iter(|| {
            let mut buf = StrBuf::new();
            for i in 0..256i32 {
                buf.append_int(black_box(i64::from(i))).unwrap();
                buf.append_float(black_box(f64::from(i) * 0.5)).unwrap();
            }
            black_box(buf)
        });
    });
}

criterion_group!(benches, bench_append, bench_numbers);
criterion_main!(benches);
