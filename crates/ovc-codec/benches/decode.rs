//! Benchmarks for decoding and encoding option value strings.
//!
//! Measures:
//! - Decoding dense tries of increasing depth
//! - Decoding wide one-dimensional range lists
//! - Encoding the same sets back

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use ovc_codec::{decode_encoded_variant, encode_option_values};

// =============================================================================
// Test Data Generation
// =============================================================================

/// All `width^depth` combinations in row-major order.
fn dense_combinations(depth: usize, width: u32) -> Vec<Vec<u32>> {
    let mut output = vec![Vec::new()];
    for _ in 0..depth {
        output = output
            .into_iter()
            .flat_map(|prefix: Vec<u32>| {
                (0..width).map(move |value| {
                    let mut next = prefix.clone();
                    next.push(value);
                    next
                })
            })
            .collect();
    }
    output
}

/// Every third value missing, so the leaf lists alternate runs and gaps.
fn gapped_combinations(depth: usize, width: u32) -> Vec<Vec<u32>> {
    dense_combinations(depth, width)
        .into_iter()
        .filter(|c| c.last().is_some_and(|last| last % 3 != 2))
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for depth in [1, 2, 3, 4] {
        for (name, combinations) in [
            ("dense", dense_combinations(depth, 8)),
            ("gapped", gapped_combinations(depth, 8)),
        ] {
            let Ok(encoded) = encode_option_values(&combinations) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &encoded,
                |b, encoded| b.iter(|| decode_encoded_variant(Some(black_box(encoded.as_str())))),
            );
        }
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for depth in [2, 3, 4] {
        let combinations = gapped_combinations(depth, 8);
        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            &combinations,
            |b, combinations| b.iter(|| encode_option_values(black_box(combinations))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
