use criterion::{criterion_group, criterion_main, Criterion};
use ranker_core::{search, Index};

fn synthetic_corpus() -> Index {
    let words = [
        "rust", "index", "query", "vector", "cosine", "term", "corpus", "rank", "score", "token",
    ];
    let docs = (0..200).map(|i| {
        let body: Vec<&str> = (0..120)
            .map(|j| words[(i * 7 + j * 3) % words.len()])
            .collect();
        (format!("doc{i}.txt"), body.join(" "))
    });
    Index::build(docs)
}

fn bench_search(c: &mut Criterion) {
    let index = synthetic_corpus();
    c.bench_function("search_small_corpus", |b| {
        b.iter(|| search(&index, "rust cosine rank"))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
