//! Tests for graph value types.

use super::types::{Edge, Path};

#[test]
fn test_edge_accessors() {
    let edge = Edge::new("b", 12.5);
    assert_eq!(edge.to(), "b");
    assert!((edge.cost() - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_path_accessors() {
    let path = Path::new(vec!["a".to_string(), "b".to_string()], 7.0);
    assert_eq!(path.nodes(), ["a", "b"]);
    assert_eq!(path.len(), 2);
    assert!(!path.is_empty());
    assert!((path.total_cost() - 7.0).abs() < f64::EPSILON);
    assert_eq!(path.into_nodes(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_path_serde_round_trip() {
    let path = Path::new(vec!["a".to_string(), "b".to_string()], 7.0);
    let json = serde_json::to_string(&path).unwrap();
    let back: Path = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}
