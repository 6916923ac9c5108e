use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the gridfall library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a map name could not be resolved against the catalog.
    #[error("unknown map: {name}{}", format_suggestions(.suggestions))]
    UnknownMap {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when routing is attempted over a graph with no nodes.
    #[error("road graph has no nodes")]
    EmptyGraph,

    /// Raised when no route exists between the snapped road nodes.
    #[error("no route found between road nodes {start} and {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
