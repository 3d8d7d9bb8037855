use criterion::{criterion_group, criterion_main, Criterion};

use ordered_set::{OrderedSet, StableSet};

// Knuth multiplicative hashing scatters the keys so insertion order and
// hash order disagree, which is the case these containers exist for.
fn keys(n: u64) -> Vec<u64> {
    (0..n).map(|i| i.wrapping_mul(2654435761) % (n / 2)).collect()
}

fn bench_sets(c: &mut Criterion) {
    let input = keys(4096);
    let ordered: OrderedSet<u64> = input.iter().copied().collect();
    let stable: StableSet<u64> = input.iter().copied().collect();
    let other: OrderedSet<u64> = (0..1024).collect();
    let other_stable: StableSet<u64> = (0..1024).collect();

    c.bench_function("ordered - collect 4k with dupes", |b| {
        b.iter(|| input.iter().copied().collect::<OrderedSet<u64>>())
    });
    c.bench_function("stable - collect 4k with dupes", |b| {
        b.iter(|| input.iter().copied().collect::<StableSet<u64>>())
    });

    c.bench_function("ordered - contains hit", |b| b.iter(|| ordered.contains(&0)));
    c.bench_function("ordered - contains miss", |b| {
        b.iter(|| ordered.contains(&u64::MAX))
    });
    c.bench_function("ordered - index_of", |b| b.iter(|| ordered.index_of(&7)));
    c.bench_function("stable - index_of", |b| b.iter(|| stable.index_of(&7)));

    c.bench_function("ordered - remove middle + reinsert", |b| {
        b.iter(|| {
            let mut s = ordered.clone();
            s.remove(&7);
            s.insert(7)
        })
    });
    c.bench_function("stable - remove middle + reinsert", |b| {
        b.iter(|| {
            let mut s = stable.clone();
            s.remove(&7);
            s.insert(7)
        })
    });

    c.bench_function("ordered - union", |b| b.iter(|| ordered.union(&other)));
    c.bench_function("ordered - intersection", |b| {
        b.iter(|| ordered.intersection(&other))
    });
    c.bench_function("stable - union", |b| b.iter(|| stable.union(&other_stable)));

    c.bench_function("ordered - iterate 2k", |b| {
        b.iter(|| ordered.iter().sum::<u64>())
    });
    c.bench_function("stable - iterate 2k", |b| b.iter(|| stable.iter().sum::<u64>()));
}

criterion_group!(benches, bench_sets);
criterion_main!(benches);
