// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Benchmarks
//!
//! Run with:
//! cargo bench --bench algo_benchmarks
//!
//! Graph size is configured through `BENCH_NODES` and `BENCH_EDGES_PER_NODE`.

use arbor::{
    Algorithm, ArborConfig, AvlTree, FloydWarshall, FloydWarshallConfig, Graph, bellman_ford, bfs,
    connected_components, dfs, dijkstra, kruskal, prim,
};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::env;

#[derive(Clone, Debug)]
struct AlgoBenchConfig {
    nodes: usize,
    edges_per_node: usize,
}

impl AlgoBenchConfig {
    fn from_env() -> Self {
        let nodes = env::var("BENCH_NODES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000); // Default 1000 nodes for algorithm benchmarks
        let edges_per_node = env::var("BENCH_EDGES_PER_NODE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self {
            nodes,
            edges_per_node,
        }
    }

    fn label(&self) -> String {
        format!("{}n_{}deg", self.nodes, self.edges_per_node)
    }
}

/// Random graph with non-negative weights. Seeded so runs are comparable.
fn random_graph(cfg: &AlgoBenchConfig, directed: bool) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let nodes = cfg.nodes.max(1);
    let mut graph = Graph::new(nodes, directed).unwrap();

    for src in 0..nodes as u32 {
        for _ in 0..cfg.edges_per_node {
            let dst = rng.gen_range(0..nodes as u32);
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(src, dst, weight).unwrap();
        }
    }
    graph
}

fn run_graph_benchmark<T>(c: &mut Criterion, name: &str, directed: bool, algo: fn(&Graph) -> T) {
    let config = AlgoBenchConfig::from_env();
    let graph = random_graph(&config, directed);
    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    group.bench_with_input(
        BenchmarkId::new("exec", config.label()),
        &graph,
        |b, graph| b.iter(|| algo(graph)),
    );
    group.finish();
}

fn bench_dfs(c: &mut Criterion) {
    run_graph_benchmark(c, "dfs", true, |g| dfs(g, 0).unwrap());
}

fn bench_bfs(c: &mut Criterion) {
    run_graph_benchmark(c, "bfs", true, |g| bfs(g, 0).unwrap());
}

fn bench_components(c: &mut Criterion) {
    run_graph_benchmark(c, "connected_components", false, |g| {
        connected_components(g).unwrap()
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    run_graph_benchmark(c, "dijkstra", true, |g| dijkstra(g, 0).unwrap());
}

fn bench_bellman_ford(c: &mut Criterion) {
    run_graph_benchmark(c, "bellman_ford", true, |g| bellman_ford(g, 0).unwrap());
}

fn bench_kruskal(c: &mut Criterion) {
    run_graph_benchmark(c, "kruskal", false, |g| kruskal(g).unwrap());
}

fn bench_prim(c: &mut Criterion) {
    run_graph_benchmark(c, "prim", false, |g| prim(g, 0).unwrap());
}

fn bench_floyd_warshall(c: &mut Criterion) {
    // O(V^3): only run on small graphs
    let config = AlgoBenchConfig::from_env();
    if config.nodes > 500 {
        return;
    }
    let graph = random_graph(&config, true);
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for (label, parallelism) in [("sequential", 1), ("parallel", ArborConfig::default().parallelism)]
    {
        let fw_config = FloydWarshallConfig {
            parallelism,
            parallel_threshold: 0,
            ..FloydWarshallConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(label, config.label()),
            &fw_config,
            |b, cfg| b.iter(|| FloydWarshall::run(&graph, cfg.clone()).unwrap()),
        );
    }
    group.finish();
}

fn bench_avl(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let n = config.nodes * config.edges_per_node.max(1);
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(7));

    let mut group = c.benchmark_group("avl");
    group.sample_size(10);

    group.bench_with_input(BenchmarkId::new("insert", n), &keys, |b, keys| {
        b.iter(|| keys.iter().copied().collect::<AvlTree<u64>>())
    });

    group.bench_with_input(BenchmarkId::new("remove", n), &keys, |b, keys| {
        b.iter_batched(
            || keys.iter().copied().collect::<AvlTree<u64>>(),
            |mut tree| {
                for k in keys {
                    tree.remove(k).unwrap();
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_dfs,
    bench_bfs,
    bench_components,
    bench_dijkstra,
    bench_bellman_ford,
    bench_kruskal,
    bench_prim,
    bench_floyd_warshall,
    bench_avl
);
criterion_main!(benches);
