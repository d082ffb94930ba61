use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{DISTRIBUTIONS, apply_runtime_for_len, generate_dataset};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use inplace_sort::{SortAlgorithm, algorithm_name, all_algorithms, sort_with};

const BENCH_SIZES: [usize; 5] = [16, 256, 4096, 65536, 262144];
// Quadratic; larger inputs take minutes per sample.
const INSERTION_SORT_MAX_LEN: usize = 4096;

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_for_len(&mut group, size);
            let base = generate_dataset(dist, size);

            for &algo in all_algorithms() {
                if algo == SortAlgorithm::InsertionSort && size > INSERTION_SORT_MAX_LEN {
                    continue;
                }
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort_with(algo, &mut data, u64::cmp).unwrap();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
