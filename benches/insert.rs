use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    Criterion,
};
use expresslane::{
    SkipList,
    SkipListConfig,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

const ITEMS: usize = 10_000;

fn list(height: usize) -> SkipList<u64> {
    SkipList::with_config(SkipListConfig::default().with_height(height).with_seed(0x5eed)).unwrap()
}

pub fn insert_ascending(c: &mut Criterion) {
    c.bench_function("SkipList::insert() ascending", |b| {
        b.iter_batched(
            || list(12),
            |mut list| {
                for i in 0..ITEMS as u64 {
                    list.insert(black_box(i));
                }
                list
            },
            BatchSize::LargeInput,
        )
    });
}

pub fn insert_random(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let values = (0..ITEMS).map(|_| rng.gen::<u64>()).collect::<Vec<_>>();

    let mut group = c.benchmark_group("SkipList::insert() random");
    for height in [2, 4, 8, 12] {
        group.bench_function(format!("height {}", height), |b| {
            b.iter_batched(
                || list(height),
                |mut list| {
                    for value in values.iter() {
                        list.insert(black_box(*value));
                    }
                    list
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, insert_ascending, insert_random);
criterion_main!(benches);
