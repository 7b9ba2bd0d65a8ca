//! Segmentation throughput with the bundled grammar
//!
//! Run with: cargo bench --bench segmentation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordbreak_core::{default_ruleset, load_bundled_ruleset, WordBreaker, WordSegmenter};

/// Generate test text of specified size
fn generate_text(base: &str, size: usize) -> String {
    let mut text = base.repeat(size / base.len() + 1);
    let mut end = size;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let breaker = WordBreaker::new(default_ruleset().unwrap());
    let base = "The quick brown fox can't jump 32.3 feet, right? ";

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(base, size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("words", size), &text, |b, text| {
            b.iter(|| breaker.words(black_box(text)).count());
        });
    }

    group.finish();
}

fn bench_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripts");
    let breaker = WordBreaker::new(default_ruleset().unwrap());

    for (name, base) in [
        ("latin", "Résumé naïve café, déjà vu. "),
        ("hebrew", "\u{05E9}\u{05DC}\u{05D5}\u{05DD} \u{05E2}\u{05D5}\u{05DC}\u{05DD}\" "),
        ("katakana", "カタカナ・テキスト "),
        ("combining", "a\u{0301}b\u{0300}\u{0301}c "),
    ] {
        let text = generate_text(base, 65_536);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("words", name), &text, |b, text| {
            b.iter(|| breaker.words(black_box(text)).count());
        });
    }

    group.finish();
}

fn bench_grammar_loading(c: &mut Criterion) {
    c.bench_function("load_bundled_ruleset", |b| {
        b.iter(|| load_bundled_ruleset().unwrap());
    });
}

fn bench_top_words(c: &mut Criterion) {
    let segmenter = WordSegmenter::with_defaults().unwrap();
    let text = generate_text("one two three two three three four four four four ", 102_400);

    c.bench_function("top_words_10", |b| {
        b.iter(|| segmenter.top_words(black_box(&text), 10).unwrap());
    });
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_scripts,
    bench_grammar_loading,
    bench_top_words
);
criterion_main!(benches);
