//! Road network data model: nodes, symmetric connections, and the
//! copy-on-write mutation API.
//!
//! Every mutation returns a new [`RoadGraph`] value instead of mutating in
//! place, so undo snapshots can retain prior states without aliasing.
//! Connections are always symmetric: if `a` lists `b`, then `b` lists `a`,
//! and deletion strips the deleted node from every neighbour.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Opaque stable identifier for a road node.
///
/// Any unique string is valid; generated ids use a monotonic counter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

/// A single node of the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    pub id: NodeId,
    pub position: Point,
    pub connections: BTreeSet<NodeId>,
}

/// The road network graph.
///
/// Node iteration is ordered by id, which makes nearest-node tie-breaks and
/// search expansion deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    nodes: BTreeMap<NodeId, RoadNode>,
    next_id: u64,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&RoadNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.values()
    }

    pub fn are_connected(&self, a: &NodeId, b: &NodeId) -> bool {
        self.nodes
            .get(a)
            .map(|node| node.connections.contains(b))
            .unwrap_or(false)
    }

    /// Add a node with a generated id and no connections, returning the new
    /// graph value and the id.
    pub fn add_node(&self, position: Point) -> (RoadGraph, NodeId) {
        let mut next = self.clone();
        let id = next.generate_id();
        next.nodes.insert(
            id.clone(),
            RoadNode {
                id: id.clone(),
                position,
                connections: BTreeSet::new(),
            },
        );
        (next, id)
    }

    /// Builder-style insert of a node under a caller-chosen id with no
    /// connections. Replaces any node already stored under `id`.
    pub fn with_node(&self, id: impl Into<NodeId>, position: Point) -> RoadGraph {
        let id = id.into();
        let mut next = self.clone();
        next.nodes.insert(
            id.clone(),
            RoadNode {
                id,
                position,
                connections: BTreeSet::new(),
            },
        );
        next
    }

    /// Connect two nodes symmetrically.
    ///
    /// Idempotent: reconnecting an existing pair returns an identical graph.
    /// Silently returns the graph unchanged when either id is absent; a
    /// broken reference must not crash.
    pub fn connect(&self, a: &NodeId, b: &NodeId) -> RoadGraph {
        if a == b || !self.contains(a) || !self.contains(b) {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(a) {
            node.connections.insert(b.clone());
        }
        if let Some(node) = next.nodes.get_mut(b) {
            node.connections.insert(a.clone());
        }
        next
    }

    /// Remove a node and strip it from every neighbour's connection set.
    /// No-op when the id is absent.
    pub fn delete_node(&self, id: &NodeId) -> RoadGraph {
        if !self.contains(id) {
            return self.clone();
        }
        let mut next = self.clone();
        let removed = next.nodes.remove(id);
        if let Some(removed) = removed {
            for neighbour in &removed.connections {
                if let Some(node) = next.nodes.get_mut(neighbour) {
                    node.connections.remove(id);
                }
            }
        }
        next
    }

    /// Id of the node closest to `point`, or `None` for an empty graph.
    ///
    /// Exhaustive linear scan; ties resolve to the lowest id because nodes
    /// iterate in id order and only a strictly smaller distance replaces the
    /// current best.
    pub fn nearest_node(&self, point: &Point) -> Option<&NodeId> {
        let mut best: Option<(&NodeId, f64)> = None;
        for node in self.nodes.values() {
            let dist = node.position.distance_to(point);
            if best.map(|(_, d)| dist < d).unwrap_or(true) {
                best = Some((&node.id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Advance the generator until it yields an id not present in the graph,
    /// so imported graphs with arbitrary ids never collide.
    fn generate_id(&mut self) -> NodeId {
        loop {
            self.next_id += 1;
            let candidate = NodeId(format!("n{}", self.next_id));
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
