use alice_hamming::{search, Alphabet, HammingSearcher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic pseudo-random text over `symbols` (xorshift)
fn generate_text(size: usize, symbols: &[u8]) -> Vec<u8> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            symbols[(state % symbols.len() as u64) as usize]
        })
        .collect()
}

fn bench_pattern_length(c: &mut Criterion) {
    let alphabet = Alphabet::new(b"ACGT");
    let text = generate_text(100_000, b"ACGT");

    let mut group = c.benchmark_group("pattern_length");

    // 64 is the last narrow width, 65 the first wide one
    for m in [8, 32, 64, 65, 128, 256] {
        let pattern = text[1000..1000 + m].to_vec();
        let searcher = HammingSearcher::new(alphabet.clone(), &pattern, m / 4);
        group.bench_with_input(BenchmarkId::new("m", m), &text, |b, text| {
            b.iter(|| searcher.count(black_box(text)))
        });
    }
    group.finish();
}

fn bench_alphabet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabet_size");

    for symbols in [&b"01"[..], &b"ACGT"[..], &b"abcdefghijklmnopqrstuvwxyz"[..]] {
        let text = generate_text(100_000, symbols);
        let alphabet = Alphabet::new(symbols);
        let searcher = HammingSearcher::new(alphabet, &text[500..532], 4);
        group.bench_with_input(BenchmarkId::new("sigma", symbols.len()), &text, |b, text| {
            b.iter(|| searcher.count(black_box(text)))
        });
    }
    group.finish();
}

fn bench_first_match(c: &mut Criterion) {
    let alphabet = Alphabet::new(b"ACGT");
    let text = generate_text(100_000, b"ACGT");
    let pattern = text[90_000..90_020].to_vec();

    c.bench_function("is_match_late", |b| {
        b.iter(|| search(&alphabet, black_box(&pattern), 0, black_box(&text)).next())
    });

    c.bench_function("take_10", |b| {
        b.iter(|| {
            let n = search(&alphabet, black_box(&pattern), 10, black_box(&text))
                .take(10)
                .count();
            black_box(n)
        })
    });
}

criterion_group!(
    benches,
    bench_pattern_length,
    bench_alphabet_size,
    bench_first_match,
);
criterion_main!(benches);
