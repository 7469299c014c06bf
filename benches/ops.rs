use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use streakcache::BoundedOrderedCache;

fn bench_insert_wrap(c: &mut Criterion) {
    c.bench_function("insert_wrap_1024", |b| {
        b.iter(|| {
            let mut cache: BoundedOrderedCache<u64, 1024> = BoundedOrderedCache::new();
            for i in 0..4096u64 {
                cache.insert(i);
            }
            cache.len()
        })
    });
}

fn bench_insert_random_extrema(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let values: Vec<i64> = (0..4096).map(|_| rng.gen()).collect();

    c.bench_function("insert_random_extrema_1024", |b| {
        b.iter(|| {
            let mut cache: BoundedOrderedCache<i64, 1024> = BoundedOrderedCache::new();
            for &v in &values {
                cache.insert(v);
            }
            (cache.streak_high().copied(), cache.streak_low().copied())
        })
    });
}

fn bench_evict_drain(c: &mut Criterion) {
    c.bench_function("evict_drain_1024", |b| {
        b.iter(|| {
            let mut cache: BoundedOrderedCache<u64, 1024> = BoundedOrderedCache::new();
            for i in 0..1024u64 {
                cache.insert(i);
            }
            let mut sum = 0u64;
            while let Ok(v) = cache.evict_oldest() {
                sum = sum.wrapping_add(v);
            }
            sum
        })
    });
}

fn bench_iter_traversal(c: &mut Criterion) {
    let mut cache: BoundedOrderedCache<u64, 1024> = BoundedOrderedCache::new();
    for i in 0..1024u64 {
        cache.insert(i);
    }

    c.bench_function("iter_traversal_1024", |b| {
        b.iter(|| cache.iter().sum::<u64>())
    });
}

criterion_group!(
    benches,
    bench_insert_wrap,
    bench_insert_random_extrema,
    bench_evict_drain,
    bench_iter_traversal
);
criterion_main!(benches);
