use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ezid::{base32, format_id, parse_id, IdGenerator};

// Common test values used across benchmarks
const TEST_VALUES: [i64; 5] = [
    1,            // Small number
    1000,         // Medium number
    123_456_789,  // Large number
    i64::MAX / 2, // Very large number
    i64::MAX,     // Maximum i64
];

pub fn id_generation_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("ID Generation Comparison");
    let generator = IdGenerator::new(1).unwrap();

    group.bench_function("int64_generation", |b| {
        b.iter(|| black_box(generator.next_id().unwrap()));
    });

    group.bench_function("ez_id_generation", |b| {
        b.iter(|| black_box(generator.next_ez_id().unwrap()));
    });

    group.finish();
}

pub fn base32_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Base32 Encoding");

    for &value in &TEST_VALUES {
        group.bench_with_input(
            BenchmarkId::new("encode_i64", value),
            &value,
            |b, &value| {
                b.iter(|| black_box(base32::encode_i64(value)));
            },
        );
        group.bench_with_input(BenchmarkId::new("format_id", value), &value, |b, &value| {
            b.iter(|| black_box(format_id(value)));
        });
    }

    let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(100);
    group.bench_function("encode_bytes_5k", |b| {
        b.iter(|| black_box(base32::encode(paragraph.as_bytes())));
    });

    group.finish();
}

pub fn base32_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Base32 Decoding");

    for &value in &TEST_VALUES {
        let encoded = base32::encode_i64(value);
        let formatted = format_id(value);

        group.bench_with_input(
            BenchmarkId::new("decode_i64", value),
            &encoded,
            |b, encoded| {
                b.iter(|| black_box(base32::decode_i64(encoded).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parse_id", value),
            &formatted,
            |b, formatted| {
                b.iter(|| black_box(parse_id(formatted).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    id_generation_comparison,
    base32_encoding,
    base32_decoding
);
criterion_main!(benches);
