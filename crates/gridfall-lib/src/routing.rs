//! Ground-route orchestration: snap two free points to the road network, run
//! the pathfinder, and assemble the renderable polyline.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graph::{NodeId, RoadGraph};
use crate::maps::MapId;
use crate::path::find_path;

/// A travel-route request between two ground points.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest {
    pub map: MapId,
    pub start: Point,
    pub goal: Point,
}

/// Planned ground route.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Full polyline: start point, snapped road nodes, goal point.
    pub points: Vec<Point>,
    /// Road node ids traversed, in order.
    pub node_ids: Vec<NodeId>,
    /// Total polyline length in meters.
    pub distance_m: f64,
}

impl RoutePlan {
    /// Number of road hops in the route.
    pub fn hop_count(&self) -> usize {
        self.node_ids.len().saturating_sub(1)
    }
}

/// Compute the shortest road route between `request.start` and
/// `request.goal`.
///
/// Both endpoints snap to their nearest road node; the returned polyline
/// includes the off-road legs to and from the network.
pub fn plan_route(graph: &RoadGraph, request: &RouteRequest) -> Result<RoutePlan> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    // Non-empty graph, so both snaps succeed.
    let start_id = graph
        .nearest_node(&request.start)
        .cloned()
        .ok_or(Error::EmptyGraph)?;
    let goal_id = graph
        .nearest_node(&request.goal)
        .cloned()
        .ok_or(Error::EmptyGraph)?;

    let node_ids = find_path(graph, &start_id, &goal_id).ok_or_else(|| Error::RouteNotFound {
        start: start_id.clone(),
        goal: goal_id.clone(),
    })?;

    let mut points = Vec::with_capacity(node_ids.len() + 2);
    points.push(request.start);
    for id in &node_ids {
        if let Some(node) = graph.node(id) {
            points.push(node.position);
        }
    }
    points.push(request.goal);

    let distance_m: f64 = points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]) * request.map.size_meters())
        .sum();

    tracing::debug!(
        hops = node_ids.len().saturating_sub(1),
        distance_m,
        "planned ground route"
    );

    Ok(RoutePlan {
        points,
        node_ids,
        distance_m,
    })
}
