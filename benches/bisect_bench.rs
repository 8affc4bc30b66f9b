use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use more_bisect::{Builder, Probe};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_uniform_data(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<u64> = (0..n).map(|_| rng.r#gen()).collect();
    data.sort();
    data
}

fn generate_duplicate_heavy_data(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<u64> = (0..n).map(|_| rng.gen_range(0..1000)).collect();
    data.sort();
    data
}

fn generate_queries(data: &[u64], num_queries: usize, lookup_ratio: f64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_lookups = (num_queries as f64 * lookup_ratio) as usize;

    let mut queries = Vec::with_capacity(num_queries);

    for _ in 0..num_lookups {
        let idx = rng.gen_range(0..data.len());
        queries.push(data[idx]);
    }

    let min_key = data.first().copied().unwrap_or(0);
    let max_key = data.last().copied().unwrap_or(u64::MAX);
    for _ in num_lookups..num_queries {
        queries.push(rng.gen_range(min_key..=max_key));
    }

    queries
}

fn bench_insertion_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_points");

    for &n in &[1_000usize, 100_000, 1_000_000] {
        let data = generate_uniform_data(n, 42);
        let queries = generate_queries(&data, 10_000, 0.5, 123);
        let probe = Probe::over(&data);

        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("bisect_left", n),
            &(&probe, &queries),
            |b, (probe, queries)| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for q in *queries {
                        sum += probe.bisect_left(q).unwrap_or(0);
                    }
                    black_box(sum)
                });
            },
        );

        // Slice binary search (baseline)
        group.bench_with_input(
            BenchmarkId::new("partition_point", n),
            &(&data, &queries),
            |b, (data, queries)| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for q in *queries {
                        sum += data.partition_point(|x| x < q);
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_queries");

    for &n in &[100_000usize, 1_000_000] {
        let data = generate_duplicate_heavy_data(n, 7);
        let queries = generate_queries(&data, 10_000, 0.8, 99);
        let probe = Probe::over(&data);

        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("any_pos_eq", n),
            &(&probe, &queries),
            |b, (probe, queries)| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for q in *queries {
                        if let Ok(Some(_)) = probe.any_pos_eq(q) {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("first_pos_eq", n),
            &(&probe, &queries),
            |b, (probe, queries)| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for q in *queries {
                        if let Ok(Some(i)) = probe.first_pos_eq(q) {
                            sum += i;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("last_closest_to", n),
            &(&probe, &queries),
            |b, (probe, queries)| {
                b.iter(|| {
                    let mut sum = 0usize;
                    for q in *queries {
                        if let Ok(Some(i)) = probe.last_closest_to(q) {
                            sum += i;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        // Slice binary search (baseline, any match)
        group.bench_with_input(
            BenchmarkId::new("slice_binary_search", n),
            &(&data, &queries),
            |b, (data, queries)| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for q in *queries {
                        if data.binary_search(q).is_ok() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

fn bench_key_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_functions");

    let n = 1_000_000;
    let data = generate_uniform_data(n, 42);
    let pairs: Vec<(u64, u32)> = data.iter().map(|&k| (k, 0)).collect();
    let queries = generate_queries(&data, 10_000, 0.5, 999);

    group.throughput(Throughput::Elements(queries.len() as u64));

    let identity = Probe::over(&data);
    group.bench_function("identity", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for q in &queries {
                sum += identity.bisect_right(q).unwrap_or(0);
            }
            black_box(sum)
        });
    });

    let extracted = Builder::new().over_by(&pairs, |p| p.0).unwrap();
    group.bench_function("extracted", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for q in &queries {
                sum += extracted.bisect_right(q).unwrap_or(0);
            }
            black_box(sum)
        });
    });

    let positional = Builder::new()
        .lo(0)
        .hi(n - 1)
        .positional(|i| data[i])
        .unwrap();
    group.bench_function("positional", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for q in &queries {
                sum += positional.bisect_right(q).unwrap_or(0);
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_points,
    bench_point_queries,
    bench_key_functions,
);
criterion_main!(benches);
