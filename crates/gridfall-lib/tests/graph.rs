use gridfall_lib::{NodeId, Point, RoadGraph};

fn triangle() -> RoadGraph {
    RoadGraph::new()
        .with_node("a", Point::new(0.1, 0.1))
        .with_node("b", Point::new(0.9, 0.1))
        .with_node("c", Point::new(0.5, 0.8))
        .connect(&"a".into(), &"b".into())
        .connect(&"b".into(), &"c".into())
}

#[test]
fn connect_is_symmetric() {
    let graph = triangle();
    assert!(graph.are_connected(&"a".into(), &"b".into()));
    assert!(graph.are_connected(&"b".into(), &"a".into()));
    assert!(graph.are_connected(&"b".into(), &"c".into()));
    assert!(graph.are_connected(&"c".into(), &"b".into()));
}

#[test]
fn connect_is_idempotent() {
    let graph = triangle();
    let again = graph.connect(&"a".into(), &"b".into());
    assert_eq!(graph, again);
}

#[test]
fn connect_with_missing_id_is_a_noop() {
    let graph = triangle();
    let unchanged = graph.connect(&"a".into(), &"ghost".into());
    assert_eq!(graph, unchanged);
}

#[test]
fn delete_cascades_through_neighbours() {
    let graph = triangle();
    let after = graph.delete_node(&"b".into());

    assert!(!after.contains(&"b".into()));
    for node in after.nodes() {
        assert!(
            !node.connections.contains(&NodeId::from("b")),
            "{} still references the deleted node",
            node.id
        );
    }
    // The original value is untouched.
    assert!(graph.contains(&"b".into()));
}

#[test]
fn delete_missing_id_is_a_noop() {
    let graph = triangle();
    assert_eq!(graph, graph.delete_node(&"ghost".into()));
}

#[test]
fn mutations_return_new_values() {
    let graph = triangle();
    let (with_extra, id) = graph.add_node(Point::new(0.2, 0.2));

    assert_eq!(graph.len(), 3);
    assert_eq!(with_extra.len(), 4);
    assert!(with_extra.node(&id).unwrap().connections.is_empty());
}

#[test]
fn generated_ids_skip_imported_collisions() {
    let graph = RoadGraph::new().with_node("n1", Point::new(0.5, 0.5));
    let (graph, id) = graph.add_node(Point::new(0.6, 0.6));
    assert_ne!(id, "n1".into());
    assert_eq!(graph.len(), 2);
}

#[test]
fn nearest_node_picks_the_closest() {
    let graph = triangle();
    let id = graph.nearest_node(&Point::new(0.85, 0.15)).unwrap();
    assert_eq!(*id, NodeId::from("b"));
}

#[test]
fn nearest_node_on_empty_graph_is_none() {
    assert!(RoadGraph::new().nearest_node(&Point::new(0.5, 0.5)).is_none());
}

#[test]
fn nearest_node_ties_break_to_lowest_id() {
    let graph = RoadGraph::new()
        .with_node("left", Point::new(0.4, 0.5))
        .with_node("right", Point::new(0.6, 0.5));
    let id = graph.nearest_node(&Point::new(0.5, 0.5)).unwrap();
    assert_eq!(*id, NodeId::from("left"));
}
