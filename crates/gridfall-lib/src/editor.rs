//! Interactive road-network editing session.
//!
//! A small state machine over the graph store, driven by externally supplied
//! intents: clicks, brush motion, deletion, and undo. The session owns the
//! current graph value; every mutation swaps in a fresh copy-on-write graph,
//! pushing the prior value onto a bounded undo stack first.

use crate::geometry::Point;
use crate::graph::{NodeId, RoadGraph};

/// Number of snapshots retained for undo.
const UNDO_DEPTH: usize = 20;

/// Interaction tolerances, in normalized units.
///
/// The hit radius corresponds to a screen-pixel threshold divided by the
/// render size; the caller derives it because the core must not assume a
/// display resolution.
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig {
    /// Maximum distance at which a click counts as hitting a node.
    pub hit_radius: f64,
    /// Minimum pointer travel before the brush drops another node.
    pub brush_min_distance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            // 8 px on a 1000 px render.
            hit_radius: 8.0 / 1000.0,
            // ~150 m on an 8 km map.
            brush_min_distance: 0.01875,
        }
    }
}

/// Bounded stack of full-graph snapshots.
#[derive(Debug, Clone, Default)]
struct UndoStack {
    snapshots: Vec<RoadGraph>,
}

impl UndoStack {
    /// Push a snapshot, discarding the oldest beyond [`UNDO_DEPTH`].
    fn push(&mut self, graph: RoadGraph) {
        self.snapshots.push(graph);
        if self.snapshots.len() > UNDO_DEPTH {
            let excess = self.snapshots.len() - UNDO_DEPTH;
            self.snapshots.drain(..excess);
            tracing::debug!("undo depth reached, dropping oldest snapshot");
        }
    }

    fn pop(&mut self) -> Option<RoadGraph> {
        self.snapshots.pop()
    }

    fn clear(&mut self) {
        self.snapshots.clear();
    }
}

/// An editing session over a road graph.
#[derive(Debug, Clone)]
pub struct EditorSession {
    graph: RoadGraph,
    config: EditorConfig,
    selected: Option<NodeId>,
    undo: UndoStack,
    brush_last_pos: Option<Point>,
    brush_last_node: Option<NodeId>,
}

impl EditorSession {
    pub fn new(graph: RoadGraph, config: EditorConfig) -> Self {
        Self {
            graph,
            config,
            selected: None,
            undo: UndoStack::default(),
            brush_last_pos: None,
            brush_last_node: None,
        }
    }

    /// Current graph value. Read-only; queries (pathfinding, nearest-node)
    /// borrow it from here.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Currently selected node, if any.
    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Replace the graph wholesale, clearing selection, brush state, and the
    /// undo stack. Used when the active map changes.
    pub fn reset(&mut self, graph: RoadGraph) {
        self.graph = graph;
        self.selected = None;
        self.undo.clear();
        self.end_brush_stroke();
    }

    /// Handle a click at a normalized point.
    ///
    /// Hitting the selected node deselects it; hitting another node while one
    /// is selected connects the two and moves the selection; hitting a node
    /// with no selection selects it; clicking empty space creates a node,
    /// chains it to any selection, and selects it.
    pub fn click_at(&mut self, point: Point) {
        match (self.hit_node(&point), self.selected.clone()) {
            (Some(hit), Some(selected)) if hit == selected => {
                self.selected = None;
            }
            (Some(hit), Some(selected)) => {
                // Snapshot only when the click actually mutates the graph;
                // reconnecting an existing pair must not burn an undo slot.
                if !self.graph.are_connected(&selected, &hit) {
                    self.undo.push(self.graph.clone());
                    self.graph = self.graph.connect(&selected, &hit);
                }
                self.selected = Some(hit);
            }
            (Some(hit), None) => {
                self.selected = Some(hit);
            }
            (None, selected) => {
                self.undo.push(self.graph.clone());
                let (graph, id) = self.graph.add_node(point);
                self.graph = match &selected {
                    Some(selected) => graph.connect(selected, &id),
                    None => graph,
                };
                self.selected = Some(id);
            }
        }
    }

    /// Handle continuous brush motion while the pointer is down.
    ///
    /// Drops a node each time the pointer has travelled at least the brush
    /// threshold from the last brush node, chaining it to the previous one.
    /// The first node of a stroke pushes exactly one undo snapshot.
    pub fn brush_move_to(&mut self, point: Point) {
        let moved_enough = match self.brush_last_pos {
            Some(last) => point.distance_to(&last) >= self.config.brush_min_distance,
            None => true,
        };
        if !moved_enough {
            return;
        }

        if self.brush_last_node.is_none() {
            self.undo.push(self.graph.clone());
        }

        let (graph, id) = self.graph.add_node(point);
        self.graph = match &self.brush_last_node {
            Some(previous) => graph.connect(previous, &id),
            None => graph,
        };

        self.brush_last_pos = Some(point);
        self.brush_last_node = Some(id);
    }

    /// Finish the current brush stroke (pointer released). The next
    /// [`brush_move_to`](Self::brush_move_to) starts a new chain and a new
    /// undo snapshot.
    pub fn end_brush_stroke(&mut self) {
        self.brush_last_pos = None;
        self.brush_last_node = None;
    }

    /// Delete the selected node, cascading the connection cleanup, and return
    /// to the idle state. No-op without a selection.
    pub fn delete_selected(&mut self) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        self.undo.push(self.graph.clone());
        self.graph = self.graph.delete_node(&selected);
    }

    /// Restore the most recent snapshot verbatim, clearing selection and any
    /// open brush stroke. Returns `false` when the stack is empty.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.graph = previous;
                self.selected = None;
                self.end_brush_stroke();
                true
            }
            None => false,
        }
    }

    /// Nearest node within the configured hit radius.
    fn hit_node(&self, point: &Point) -> Option<NodeId> {
        let nearest = self.graph.nearest_node(point)?.clone();
        let node = self.graph.node(&nearest)?;
        if node.position.distance_to(point) < self.config.hit_radius {
            Some(nearest)
        } else {
            None
        }
    }
}
