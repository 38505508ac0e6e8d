//! Niihau Benchmarks
//!
//! This module contains benchmarks for the Niihau Trie. The benchmarks are
//! implemented using the Criterion framework, which provides statistical
//! analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use niihau_lib::data_structures::NiihauTrie;
use std::time::Duration;

/// Deterministic pseudo-words drawn from a small xorshift generator.
fn corpus(size: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn build(words: &[String]) -> NiihauTrie {
    let mut trie = NiihauTrie::new();
    for word in words {
        trie.insert(word);
    }
    trie
}

/// Benchmark the Niihau Trie
fn bench_niihau_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("niihau_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(50);

    // Insertion throughput with different corpus sizes
    for size in [1_000, 10_000, 100_000].iter() {
        let words = corpus(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| black_box(build(words)));
        });
    }

    let words = corpus(100_000);
    let trie = build(&words);

    group.bench_function("search_hit", |b| {
        b.iter(|| {
            for word in words.iter().take(1_000) {
                black_box(trie.search(word));
            }
        });
    });

    group.bench_function("prefix_count", |b| {
        b.iter(|| black_box(trie.prefix_count(black_box("ab"))));
    });

    // Early-stopping autocomplete against full ranked enumeration
    for limit in [10, 100].iter() {
        group.bench_with_input(BenchmarkId::new("autocomplete", limit), limit, |b, &limit| {
            b.iter(|| black_box(trie.autocomplete(black_box("a"), limit)));
        });
        group.bench_with_input(
            BenchmarkId::new("autocomplete_ranked", limit),
            limit,
            |b, &limit| {
                b.iter(|| black_box(trie.autocomplete_ranked(black_box("a"), limit)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_niihau_trie);
criterion_main!(benches);
