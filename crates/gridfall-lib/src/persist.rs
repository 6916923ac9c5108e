//! Flat JSON snapshot of the road graph.
//!
//! Wire shape, which must round-trip bit-exactly:
//!
//! ```json
//! { "nodes": { "<id>": { "id": "<id>", "x": 0.5, "y": 0.5, "connections": ["<id>"] } } }
//! ```
//!
//! Import is defensive: a connection naming a missing node is skipped rather
//! than failing the whole load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Point;
use crate::graph::{NodeId, RoadGraph};

#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    nodes: BTreeMap<String, NodeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    x: f64,
    y: f64,
    connections: Vec<String>,
}

/// Serialize a graph to the snapshot format.
pub fn graph_to_json(graph: &RoadGraph) -> Result<String> {
    let file = GraphFile {
        nodes: graph
            .nodes()
            .map(|node| {
                (
                    node.id.as_str().to_string(),
                    NodeRecord {
                        id: node.id.as_str().to_string(),
                        x: node.position.x,
                        y: node.position.y,
                        connections: node
                            .connections
                            .iter()
                            .map(|id| id.as_str().to_string())
                            .collect(),
                    },
                )
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Deserialize a graph from the snapshot format.
///
/// Dangling connection references are dropped; surviving connections are
/// symmetrized so the graph invariant holds for every loaded value.
pub fn graph_from_json(json: &str) -> Result<RoadGraph> {
    let file: GraphFile = serde_json::from_str(json)?;

    let mut graph = RoadGraph::new();
    for record in file.nodes.values() {
        graph = graph.with_node(record.id.as_str(), Point::new(record.x, record.y));
    }

    for record in file.nodes.values() {
        let from = NodeId::from(record.id.as_str());
        for target in &record.connections {
            let to = NodeId::from(target.as_str());
            if !graph.contains(&to) {
                tracing::warn!(from = %from, to = %to, "skipping dangling connection");
                continue;
            }
            graph = graph.connect(&from, &to);
        }
    }

    Ok(graph)
}

/// Load a graph snapshot from a file.
pub fn load_graph(path: &Path) -> Result<RoadGraph> {
    let json = std::fs::read_to_string(path)?;
    graph_from_json(&json)
}

/// Write a graph snapshot to a file.
pub fn save_graph(path: &Path, graph: &RoadGraph) -> Result<()> {
    std::fs::write(path, graph_to_json(graph)?)?;
    Ok(())
}
