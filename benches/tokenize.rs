use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use toklab_core::{tokenize, tokenize_with_trace, Algorithm, VocabEntry};

fn bench_vocab() -> Vec<VocabEntry> {
    vec![
        VocabEntry::new("the", 6.0),
        VocabEntry::new("un", 5.0),
        VocabEntry::new("happi", 4.0),
        VocabEntry::new("ness", 4.5),
        VocabEntry::new("unhappi", 2.0),
        VocabEntry::new("ing", 4.8),
        VocabEntry::new("est", 4.2),
        VocabEntry::new("anti", 3.6),
        VocabEntry::new("dis", 3.9),
        VocabEntry::new("establish", 2.4),
        VocabEntry::new("ment", 3.2),
        VocabEntry::new("arian", 2.1),
        VocabEntry::new("ism", 3.0),
        VocabEntry::new("of", 5.5),
        VocabEntry::new("##ness", 3.8),
        VocabEntry::new("##ment", 3.1),
        VocabEntry::new("##ism", 2.9),
        VocabEntry::new("a", 3.4),
        VocabEntry::new("e", 3.3),
        VocabEntry::new("i", 3.2),
        VocabEntry::new("s", 3.1),
        VocabEntry::new("t", 3.0),
    ]
}

const TEXT: &str = "the unhappiness of antidisestablishmentarianism";

fn bench_tokenize(c: &mut Criterion) {
    let vocab = bench_vocab();
    let mut group = c.benchmark_group("tokenize");
    for algorithm in [Algorithm::Unigram, Algorithm::Bpe, Algorithm::WordPiece] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, &algorithm| b.iter(|| tokenize(TEXT, algorithm, true, &vocab)),
        );
    }
    group.finish();
}

fn bench_tokenize_with_trace(c: &mut Criterion) {
    let vocab = bench_vocab();
    let mut group = c.benchmark_group("tokenize_with_trace");
    for algorithm in [Algorithm::Unigram, Algorithm::Bpe, Algorithm::WordPiece] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, &algorithm| b.iter(|| tokenize_with_trace(TEXT, algorithm, true, &vocab)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_tokenize_with_trace);
criterion_main!(benches);
