use criterion::{Criterion, criterion_group, criterion_main};
use relations::{Relation, enumerate::relations_over};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let chain = Relation::from_pairs((0..64u32).map(|i| (i, i + 1)));
    let full = Relation::full(0..32u32);

    c.bench_function("transitive chain", |b| b.iter(|| assert!(!black_box(&chain).transitive())));
    c.bench_function("classify full", |b| b.iter(|| black_box(&full).classify()));
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate 3 elements", |b| {
        b.iter(|| {
            let equivalences = relations_over(black_box(['a', 'b', 'c']))
                .unwrap()
                .filter(|rel| rel.is_equivalence())
                .count();
            assert!(equivalences > 0);
        })
    });
}

criterion_group!(benches, bench_classify, bench_enumerate);
criterion_main!(benches);
