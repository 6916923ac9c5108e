//! A* shortest-path search over the road network.
//!
//! Edge cost and heuristic are both Euclidean distance in normalized map
//! space, so the heuristic equals the straight-line lower bound on the
//! remaining cost and is admissible and consistent.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{NodeId, RoadGraph};

/// Find the cheapest path from `start` to `end`, as an ordered id sequence.
///
/// Returns `None` when either id is absent or the nodes are in disconnected
/// components. No closed set is kept: a node settled once can be re-opened
/// when a cheaper path to it is found later, which keeps the search correct
/// without extra bookkeeping. Dangling connection entries are skipped.
pub fn find_path(graph: &RoadGraph, start: &NodeId, end: &NodeId) -> Option<Vec<NodeId>> {
    let start_node = graph.node(start)?;
    let end_node = graph.node(end)?;

    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start.clone(), 0.0);
    let start_estimate = start_node.position.distance_to(&end_node.position);
    queue.push(OpenEntry::new(start.clone(), 0.0, start_estimate));

    while let Some(entry) = queue.pop() {
        // Skip stale heap entries superseded by a cheaper relaxation.
        let current_score = match g_score.get(&entry.node) {
            Some(score) if entry.cost.0 <= *score => *score,
            _ => continue,
        };

        if entry.node == *end {
            return Some(reconstruct_path(&parents, start, end));
        }

        let Some(current) = graph.node(&entry.node) else {
            continue;
        };

        for neighbour_id in &current.connections {
            // Tolerate references to deleted nodes.
            let Some(neighbour) = graph.node(neighbour_id) else {
                continue;
            };

            let tentative_g = current_score + current.position.distance_to(&neighbour.position);
            if tentative_g < *g_score.get(neighbour_id).unwrap_or(&f64::INFINITY) {
                g_score.insert(neighbour_id.clone(), tentative_g);
                parents.insert(neighbour_id.clone(), entry.node.clone());
                let heuristic = neighbour.position.distance_to(&end_node.position);
                queue.push(OpenEntry::new(neighbour_id.clone(), tentative_g, heuristic));
            }
        }
    }

    None
}

/// Total length of a node-id path in normalized units.
///
/// Hops whose endpoints are missing from the graph contribute nothing.
pub fn path_length(graph: &RoadGraph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .filter_map(|pair| {
            let a = graph.node(&pair[0])?;
            let b = graph.node(&pair[1])?;
            Some(a.position.distance_to(&b.position))
        })
        .sum()
}

fn reconstruct_path(parents: &HashMap<NodeId, NodeId>, start: &NodeId, end: &NodeId) -> Vec<NodeId> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct OpenEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl OpenEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f-score;
        // equal scores break deterministically by node id.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
