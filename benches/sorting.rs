use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use standard_collections::algorithms;
use standard_collections::collections::adapters::PriorityQueue;
use standard_collections::collections::binary_tree::BinaryTreeMap;
use standard_collections::collections::contiguous::Vector;
use standard_collections::collections::hash::HashMap;
use standard_collections::collections::linked::LinkedList;
use standard_collections::collections::traits::Traverse;

const SIZES: [usize; 3] = [100, 10_000, 100_000];

fn rand_vector<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vector<u64> {
    (0..len).map(|_| rng.gen_range(0..len as u64)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    for len in SIZES {
        let input = rand_vector(len, &mut rng);

        group.bench_with_input(BenchmarkId::new("introsort", len), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                let all = vec.all();
                algorithms::sort(&mut vec, all);
                black_box(vec)
            })
        });
        group.bench_with_input(BenchmarkId::new("stable", len), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                let all = vec.all();
                algorithms::stable_sort(&mut vec, all);
                black_box(vec)
            })
        });
        group.bench_with_input(BenchmarkId::new("slice", len), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                vec.sort_unstable();
                black_box(vec)
            })
        });
        group.bench_with_input(BenchmarkId::new("linked-list", len), &input, |b, input| {
            b.iter(|| {
                let mut list: LinkedList<_> = input.iter().copied().collect();
                list.sort();
                black_box(list)
            })
        });
        group.bench_with_input(BenchmarkId::new("priority-queue", len), &input, |b, input| {
            b.iter(|| {
                let mut queue = PriorityQueue::from(input.clone());
                while let Some(value) = queue.pop() {
                    black_box(value);
                }
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let mut rng = ChaCha20Rng::seed_from_u64(0xb00c);

    for len in SIZES {
        let keys = rand_vector(len, &mut rng);
        let tree: BinaryTreeMap<_, _> = keys.iter().map(|k| (*k, ())).collect();
        let hash: HashMap<_, _> = keys.iter().map(|k| (*k, ())).collect();
        let mut sorted = keys.clone();
        let all = sorted.all();
        algorithms::sort(&mut sorted, all);

        group.bench_with_input(BenchmarkId::new("binary-tree", len), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| tree.contains(*k)).count())
        });
        group.bench_with_input(BenchmarkId::new("hash", len), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| hash.contains(*k)).count())
        });
        group.bench_with_input(BenchmarkId::new("binary-search", len), &keys, |b, keys| {
            b.iter(|| {
                keys.iter()
                    .filter(|k| algorithms::binary_search(&sorted, sorted.all(), *k))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_lookup);
criterion_main!(benches);
