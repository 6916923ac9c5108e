use gridfall_lib::{graph_from_json, graph_to_json, load_graph, save_graph, Point, RoadGraph};

fn sample_graph() -> RoadGraph {
    RoadGraph::new()
        .with_node("a", Point::new(0.25, 0.5))
        .with_node("b", Point::new(0.75, 0.5))
        .with_node("lone", Point::new(0.1, 0.9))
        .connect(&"a".into(), &"b".into())
}

#[test]
fn round_trip_preserves_nodes_positions_and_connections() {
    let graph = sample_graph();
    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();

    assert_eq!(restored.len(), graph.len());
    for node in graph.nodes() {
        let other = restored.node(&node.id).expect("node survives round trip");
        assert_eq!(other.position, node.position);
        assert_eq!(other.connections, node.connections);
    }
}

#[test]
fn export_matches_the_wire_shape_exactly() {
    let json = graph_to_json(&sample_graph()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let a = &value["nodes"]["a"];
    assert_eq!(a["id"], "a");
    assert_eq!(a["x"], 0.25);
    assert_eq!(a["y"], 0.5);
    assert_eq!(a["connections"], serde_json::json!(["b"]));
    assert_eq!(
        value["nodes"]["lone"]["connections"],
        serde_json::json!([])
    );
    // Nothing beyond the documented keys.
    assert_eq!(value.as_object().unwrap().len(), 1);
    assert_eq!(a.as_object().unwrap().len(), 4);
}

#[test]
fn import_skips_dangling_connections() {
    let json = r#"{
        "nodes": {
            "a": { "id": "a", "x": 0.2, "y": 0.2, "connections": ["b", "missing"] },
            "b": { "id": "b", "x": 0.4, "y": 0.2, "connections": ["a"] }
        }
    }"#;

    let graph = graph_from_json(json).unwrap();
    assert_eq!(graph.len(), 2);
    assert!(graph.are_connected(&"a".into(), &"b".into()));
    assert!(!graph.contains(&"missing".into()));
    assert_eq!(graph.node(&"a".into()).unwrap().connections.len(), 1);
}

#[test]
fn import_restores_symmetry_for_one_sided_connections() {
    let json = r#"{
        "nodes": {
            "a": { "id": "a", "x": 0.2, "y": 0.2, "connections": ["b"] },
            "b": { "id": "b", "x": 0.4, "y": 0.2, "connections": [] }
        }
    }"#;

    let graph = graph_from_json(json).unwrap();
    assert!(graph.are_connected(&"a".into(), &"b".into()));
    assert!(graph.are_connected(&"b".into(), &"a".into()));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(graph_from_json("{ not json").is_err());
    assert!(graph_from_json(r#"{"nodes": 7}"#).is_err());
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roads.json");

    let graph = sample_graph();
    save_graph(&path, &graph).unwrap();
    let restored = load_graph(&path).unwrap();

    assert_eq!(restored.len(), 3);
    assert!(restored.are_connected(&"a".into(), &"b".into()));
}
