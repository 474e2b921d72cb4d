//! Benchmarks for traversal and concurrent batch answering.
//!
//! Measures:
//! - exhaustive enumeration and cheapest-path selection on the reference
//!   route graph
//! - a mixed nine-query batch answered concurrently vs. sequentially

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wayfind_core::graph::traversal::{all_paths, cheapest_path};
use wayfind_core::graph::Graph;
use wayfind_core::query::{answer_batch, Query, QueryKind};

fn edge(from: &str, to: &str, cost: f64) -> (String, String, f64) {
    (from.to_string(), to.to_string(), cost)
}

fn build_route_graph() -> Graph {
    let nodes = ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let edges = vec![
        edge("a", "e", 42.0),
        edge("a", "b", 10.0),
        edge("e", "c", 3.0),
        edge("c", "a", 42.0),
        edge("c", "d", 5.0),
        edge("b", "d", 20.0),
        edge("b", "f", 10.0),
        edge("f", "i", 10.0),
        edge("i", "h", 10.0),
        edge("h", "g", 10.0),
        edge("d", "g", 10.0),
    ];
    Graph::build(nodes, edges)
}

fn mixed_batch() -> Vec<Query> {
    vec![
        Query::new(QueryKind::AllPaths, "a", "e"),
        Query::new(QueryKind::AllPaths, "a", "f"),
        Query::new(QueryKind::AllPaths, "a", "d"),
        Query::new(QueryKind::AllPaths, "a", "g"),
        Query::new(QueryKind::AllPaths, "f", "g"),
        Query::new(QueryKind::AllPaths, "b", "g"),
        Query::new(QueryKind::Cheapest, "a", "d"),
        Query::new(QueryKind::Cheapest, "a", "g"),
        Query::new(QueryKind::Cheapest, "e", "g"),
    ]
}

fn bench_all_paths(c: &mut Criterion) {
    let graph = build_route_graph();
    c.bench_function("all_paths_a_to_g", |b| {
        b.iter(|| black_box(all_paths(&graph, black_box("a"), black_box("g"))));
    });
}

fn bench_cheapest_path(c: &mut Criterion) {
    let graph = build_route_graph();
    c.bench_function("cheapest_path_a_to_g", |b| {
        b.iter(|| black_box(cheapest_path(&graph, black_box("a"), black_box("g"))));
    });
}

fn bench_answer_batch(c: &mut Criterion) {
    let graph = build_route_graph();
    let batch = mixed_batch();
    c.bench_function("answer_batch_mixed_9", |b| {
        b.iter(|| black_box(answer_batch(&graph, black_box(&batch))));
    });
}

fn bench_answer_batch_sequential_baseline(c: &mut Criterion) {
    // Same nine queries answered inline, as a fan-out overhead baseline.
    let graph = build_route_graph();
    let batch = mixed_batch();
    c.bench_function("answer_batch_sequential_9", |b| {
        b.iter(|| {
            for query in &batch {
                match query.kind {
                    QueryKind::AllPaths => {
                        black_box(all_paths(&graph, &query.start, &query.end));
                    }
                    QueryKind::Cheapest => {
                        black_box(cheapest_path(&graph, &query.start, &query.end));
                    }
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_all_paths,
    bench_cheapest_path,
    bench_answer_batch,
    bench_answer_batch_sequential_baseline
);
criterion_main!(benches);
