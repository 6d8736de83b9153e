//! Search Performance Benchmarks
//!
//! Run with: cargo bench -p faqih-search --bench search
//!
//! Labels:
//! - normalize/{short,long}: a title vs. a full question body
//! - search/{size}: one two-token query over N fatwas
//!
//! Targets:
//! - normalize/short: < 1µs
//! - search/1000: < 2ms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use faqih_core::{CategoryId, Fatwa, Searchable, Verdict};
use faqih_search::{normalize, Searcher};

/// Fixed seed for reproducible corpora
const BENCH_SEED: u64 = 0xDEADBEEF_CAFEBABE;

/// Simple LCG for deterministic pseudo-random picks
fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

fn corpus(size: usize) -> Vec<Fatwa> {
    let words = [
        "الصيام", "زراعة", "الأعضاء", "التخدير", "الحامل", "الدواء", "الصلاة", "المستشفى",
    ];
    let mut state = BENCH_SEED;
    (0..size)
        .map(|i| {
            let mut pick = || words[(lcg_next(&mut state) % words.len() as u64) as usize];
            let title = format!("حكم {} {}", pick(), pick());
            let question = format!("ما حكم {} عند {}؟", pick(), pick());
            Fatwa::new(
                format!("f{}", i),
                CategoryId::Miscellaneous,
                title,
                question,
                Verdict::Permitted,
            )
            .with_tags([pick()])
        })
        .collect()
}

fn normalize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let short = "حُكْمُ زِرَاعَةِ الأَعْضَاءِ";
    let long = "ما حكم إجراء العملية الجراحية للمريض الصائم في نهار رمضان إذا كانت \
                تستدعي التخدير الكلي، وهل يلزمه القضاء؟ "
        .repeat(8);

    group.bench_function("short", |b| b.iter(|| normalize(black_box(short))));
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("long", |b| b.iter(|| normalize(black_box(&long))));
    group.finish();
}

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let searcher = Searcher::default();
    let fields = Fatwa::search_fields();

    for size in [100usize, 1_000] {
        let records = corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| searcher.search(black_box("زراعة الاعضاء"), records, &fields).len())
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_benchmarks, search_benchmarks);
criterion_main!(benches);
