//! Golden network tests.
//!
//! Loads every network under `test-fixtures/networks`, builds it edge by edge
//! in the recorded order, and checks routes, resolving phase and trace length.

use netpath_graph::{Direction, Network, Resolution, TraversalEngine};
use test_fixtures::{golden_networks, load_fixture, GoldenNetwork};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build(golden: &GoldenNetwork) -> Network {
    let mut network = Network::new();
    for node in &golden.nodes {
        network.add_node(node.id, node.address);
    }
    for &(a, b) in &golden.edges {
        network.add_edge(a, b).unwrap();
    }
    network
}

fn resolution_name(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::SamePoint => "same_point",
        Resolution::Phase(Direction::Higher) => "higher",
        Resolution::Phase(Direction::Lower) => "lower",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_fixtures_are_present() {
    let files = golden_networks();
    assert!(files.len() >= 4, "expected golden networks, found {files:?}");
    assert!(test_fixtures::fixture_exists("networks/five_node_cycle.json"));
}

#[test]
fn golden_networks_match_expected_routes() {
    let engine = TraversalEngine::default();

    for file in golden_networks() {
        let golden: GoldenNetwork = load_fixture(&file);
        let mut network = build(&golden);
        assert_eq!(network.edge_count(), golden.edges.len(), "{}", golden.name);

        for query in &golden.queries {
            let label = format!("{} {}->{}", golden.name, query.source, query.dest);
            match (engine.find_path(&mut network, query.source, query.dest), &query.expected_path) {
                (Ok(found), Some(expected)) => {
                    assert_eq!(&found.path.ids(), expected, "{label}: route");
                    assert_eq!(
                        Some(resolution_name(found.resolution)),
                        query.resolved_by.as_deref(),
                        "{label}: resolving phase"
                    );
                    assert_eq!(found.trace.len(), query.expected_snapshots, "{label}: trace length");
                    let last = found.trace.last().expect("non-empty trace");
                    let mut in_path = last.in_path_ids();
                    in_path.sort();
                    let mut expected_sorted = expected.clone();
                    expected_sorted.sort();
                    assert_eq!(in_path, expected_sorted, "{label}: final in-path flags");
                }
                (Err(failure), None) => {
                    assert!(failure.is_no_path(), "{label}: expected a no-path result");
                    assert_eq!(failure.trace.len(), query.expected_snapshots, "{label}: trace length");
                }
                (Ok(found), None) => panic!("{label}: unexpected route {:?}", found.path.ids()),
                (Err(failure), Some(_)) => panic!("{label}: unexpected failure {failure}"),
            }
        }
    }
}

#[test]
fn golden_snapshot_serialization_shape() {
    let golden: GoldenNetwork = load_fixture("networks/five_node_cycle.json");
    let network = build(&golden);
    let json = network.snapshot().to_json().unwrap();

    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 5);
    for node in nodes {
        for key in ["id", "address", "visited", "inPath"] {
            assert!(node.get(key).is_some(), "node missing {key}");
        }
    }
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 5);
    assert!(edges
        .iter()
        .all(|e| e["source"].as_i64() < e["target"].as_i64()));
}
