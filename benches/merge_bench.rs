use cngt_tools::units::counting::merge_hands;
use cngt_tools::units::extraction::extract_spans;
use cngt_tools::units::{Annotation, Hand};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn hand_stream(hand: Hand, offset: i64, count: usize) -> Vec<Annotation> {
    (0..count as i64)
        .map(|i| Annotation {
            begin: offset + i * 700,
            end: offset + i * 700 + 500,
            value: format!("GLOSS-{}", i % 50),
            participant: "S001".to_owned(),
            hand,
        })
        .collect()
}

fn bench_merge_hands(c: &mut Criterion) {
    let right = hand_stream(Hand::Right, 0, 10_000);
    let left = hand_stream(Hand::Left, 350, 10_000);
    c.bench_function("merge_hands 2x10k", |b| {
        b.iter(|| merge_hands(black_box(&right), black_box(&left), 10))
    });
}

fn bench_extract_spans(c: &mut Criterion) {
    let mut stream = hand_stream(Hand::Right, 0, 10_000);
    stream.extend(hand_stream(Hand::Left, 350, 10_000));
    stream.sort_by_key(|a| a.begin);
    c.bench_function("extract_spans 20k", |b| {
        b.iter(|| extract_spans(black_box(&stream), black_box(10)))
    });
}

criterion_group!(benches, bench_merge_hands, bench_extract_spans);
criterion_main!(benches);
