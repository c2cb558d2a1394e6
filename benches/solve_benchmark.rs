use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use grid_shortest_paths::prelude::*;
use nanorand::{Rng, WyRand};

fn uniform_map(rows: usize, cols: usize) -> GridGraph {
    GridGraph::new(rows, cols, vec![1; rows * cols]).unwrap()
}

fn random_map(rows: usize, cols: usize, seed: u64) -> GridGraph {
    let mut rng = WyRand::new_seed(seed);
    let costs = (0..rows * cols)
        .map(|_| rng.generate_range(1..10usize))
        .collect();
    GridGraph::new(rows, cols, costs).unwrap()
}

/// Mostly free terrain with a few expensive patches
fn open_map(rows: usize, cols: usize, seed: u64) -> GridGraph {
    let mut rng = WyRand::new_seed(seed);
    let costs = (0..rows * cols)
        .map(|_| match rng.generate_range(0..20u8) {
            0 => 10,
            1 => 3,
            _ => 0,
        })
        .collect();
    GridGraph::new(rows, cols, costs).unwrap()
}

fn random_queries(grid: &GridGraph, starts: usize, per_start: usize) -> Vec<(Point, Point)> {
    let mut rng = WyRand::new_seed(4);
    let mut point = || {
        (
            rng.generate_range(0..grid.rows()),
            rng.generate_range(0..grid.cols()),
        )
    };
    let mut queries = Vec::with_capacity(starts * per_start);
    for _ in 0..starts {
        let start = point();
        for _ in 0..per_start {
            queries.push((start, point()));
        }
    }
    queries
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to enable more in-depth timings.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Query");

    // Log to stdout
    init();

    for size in [128, 512] {
        let maps = [
            ("Uniform", uniform_map(size, size)),
            ("Random", random_map(size, size, 4)),
        ];
        for (name, grid) in maps.iter() {
            for (config_name, config) in [
                ("Dijkstra", SolverConfig::DIJKSTRA),
                ("Manhattan", SolverConfig::default()),
                (
                    "Manhattan, Lazy",
                    SolverConfig::default().with_frontier(FrontierPolicy::Lazy),
                ),
            ] {
                let scheduler = QueryScheduler::new(grid, config);
                let id = format!(
                    "{} Map, {}, Map Size: ({}, {})",
                    name, config_name, size, size
                );
                group.bench_function(&id, |b| {
                    b.iter(|| scheduler.solve_one((0, 0), (size - 1, size - 1)))
                });
            }
        }
    }
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let size = 256;
    let grid = random_map(size, size, 7);
    let queries = random_queries(&grid, 16, 32);

    let scheduler = QueryScheduler::new(&grid, SolverConfig::DIJKSTRA);
    let id = format!(
        "Random Map, Single Threaded, Map Size: ({}, {}), Queries: {}",
        size,
        size,
        queries.len()
    );
    group.bench_function(&id, |b| b.iter(|| scheduler.solve(&queries)));

    #[cfg(feature = "parallel")]
    {
        let scheduler = QueryScheduler::new(&grid, SolverConfig::DIJKSTRA.with_parallel(true));
        let id = format!(
            "Random Map, Parallel, Map Size: ({}, {}), Queries: {}",
            size,
            size,
            queries.len()
        );
        group.bench_function(&id, |b| b.iter(|| scheduler.solve(&queries)));
    }
}

fn bench_open_terrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Open Terrain");
    group.sample_size(10);

    let size = 512;
    let grid = open_map(size, size, 11);
    let queries = random_queries(&grid, 8, 16);

    let id = format!("Compress Regions, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| b.iter(|| RegionMap::compress(&grid)));

    for (name, config) in [
        ("Raw", SolverConfig::DIJKSTRA),
        ("Compressed", SolverConfig::OPEN_TERRAIN.with_parallel(false)),
    ] {
        let scheduler = QueryScheduler::new(&grid, config);
        let id = format!(
            "{}, Map Size: ({}, {}), Queries: {}",
            name,
            size,
            size,
            queries.len()
        );
        group.bench_function(&id, |b| b.iter(|| scheduler.solve(&queries)));
    }
}

criterion_group!(benches, bench_single_query, bench_batch, bench_open_terrain);
criterion_main!(benches);
