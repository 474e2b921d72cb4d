//! Property-based tests for path enumeration and cheapest-path selection.
//!
//! Random small graphs (unique directed edges, no self-loops) are generated
//! and the traversal contracts are checked against them: every enumerated
//! path is simple and edge-connected with an exact cost sum, the cheapest
//! selection is never beaten by any enumerated path, and the two operations
//! agree on connectivity.

use std::collections::{HashMap, HashSet};

use proptest::collection::hash_set;
use proptest::prelude::*;

use wayfind_core::graph::traversal::{all_paths, cheapest_path};
use wayfind_core::graph::Graph;

const NODE_POOL: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

#[derive(Debug, Clone)]
struct GraphParts {
    nodes: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

prop_compose! {
    /// Up to six nodes and a unique-pair edge set with bounded costs.
    fn arb_graph_parts()(
        node_count in 2usize..=NODE_POOL.len(),
        pair_seed in hash_set((0usize..NODE_POOL.len(), 0usize..NODE_POOL.len()), 0..14),
        costs in proptest::collection::vec(0.0f64..50.0, 14),
    ) -> GraphParts {
        let nodes: Vec<String> = NODE_POOL[..node_count]
            .iter()
            .map(ToString::to_string)
            .collect();
        let edges = pair_seed
            .into_iter()
            .filter(|(from, to)| from != to && *from < node_count && *to < node_count)
            .zip(costs)
            .map(|((from, to), cost)| (nodes[from].clone(), nodes[to].clone(), cost))
            .collect();
        GraphParts { nodes, edges }
    }
}

fn edge_costs(parts: &GraphParts) -> HashMap<(String, String), f64> {
    parts
        .edges
        .iter()
        .map(|(from, to, cost)| ((from.clone(), to.clone()), *cost))
        .collect()
}

proptest! {
    #[test]
    fn prop_enumerated_paths_are_simple_and_edge_connected(
        parts in arb_graph_parts(),
        start_seed in 0usize..NODE_POOL.len(),
        end_seed in 0usize..NODE_POOL.len(),
    ) {
        let start = parts.nodes[start_seed % parts.nodes.len()].clone();
        let end = parts.nodes[end_seed % parts.nodes.len()].clone();
        let costs = edge_costs(&parts);
        let graph = Graph::build(parts.nodes.clone(), parts.edges.clone());

        for path in all_paths(&graph, &start, &end) {
            let nodes = path.nodes();
            prop_assert_eq!(nodes.first().map(String::as_str), Some(start.as_str()));
            prop_assert_eq!(nodes.last().map(String::as_str), Some(end.as_str()));

            let distinct: HashSet<&String> = nodes.iter().collect();
            prop_assert_eq!(distinct.len(), nodes.len(), "repeated node in path");

            let mut expected_cost = 0.0;
            for pair in nodes.windows(2) {
                let key = (pair[0].clone(), pair[1].clone());
                let cost = costs.get(&key);
                prop_assert!(cost.is_some(), "path uses edge absent from the graph");
                expected_cost += cost.unwrap();
            }
            prop_assert!((path.total_cost() - expected_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_cheapest_is_minimum_of_enumeration(
        parts in arb_graph_parts(),
        start_seed in 0usize..NODE_POOL.len(),
        end_seed in 0usize..NODE_POOL.len(),
    ) {
        let start = parts.nodes[start_seed % parts.nodes.len()].clone();
        let end = parts.nodes[end_seed % parts.nodes.len()].clone();
        let graph = Graph::build(parts.nodes.clone(), parts.edges.clone());

        let enumerated = all_paths(&graph, &start, &end);
        let cheapest = cheapest_path(&graph, &start, &end);

        // The two operations agree on connectivity, in both directions.
        prop_assert_eq!(enumerated.is_empty(), cheapest.is_none());

        if let Some(best) = cheapest {
            for path in &enumerated {
                prop_assert!(best.total_cost() <= path.total_cost());
            }
            prop_assert!(enumerated.contains(&best));
        }
    }

    #[test]
    fn prop_start_equals_end_is_one_trivial_path(
        parts in arb_graph_parts(),
        seed in 0usize..NODE_POOL.len(),
    ) {
        let node = parts.nodes[seed % parts.nodes.len()].clone();
        let graph = Graph::build(parts.nodes.clone(), parts.edges.clone());

        let paths = all_paths(&graph, &node, &node);
        prop_assert_eq!(paths.len(), 1);
        prop_assert_eq!(paths[0].nodes(), &[node.clone()][..]);
        prop_assert!(paths[0].total_cost().abs() < f64::EPSILON);

        let cheapest = cheapest_path(&graph, &node, &node).unwrap();
        prop_assert_eq!(cheapest.nodes(), &[node][..]);
    }
}
