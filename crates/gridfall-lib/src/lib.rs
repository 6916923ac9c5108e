//! Gridfall library entry points.
//!
//! This crate plans two things on a normalized `[0,1] x [0,1]` game map:
//! aircraft jump and dive points for reaching a ground target under per-map
//! drop rules, and shortest travel routes along a user-editable road network.
//! Higher-level consumers (CLI, UI layers) should only depend on the items
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod drop;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod maps;
pub mod path;
pub mod persist;
pub mod routing;
pub mod strategy;

pub use drop::{plan_drop, DropPlan, DropRequest};
pub use editor::{EditorConfig, EditorSession};
pub use error::{Error, Result};
pub use geometry::Point;
pub use graph::{NodeId, RoadGraph, RoadNode};
pub use maps::{round_display_distance, MapId, SpecialZone};
pub use path::{find_path, path_length};
pub use persist::{graph_from_json, graph_to_json, load_graph, save_graph};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use strategy::{classify, dive_distance_m, DropStrategy, JumpRule};
