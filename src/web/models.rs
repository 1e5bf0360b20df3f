use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed edge as sent by API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// One almost-shortest-path query
#[derive(Debug, Clone, Deserialize)]
pub struct AlmostShortestRequest {
    pub vertex_count: usize,
    pub source: usize,
    pub destination: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Response containing the query answer
#[derive(Debug, Clone, Serialize)]
pub struct AlmostShortestResponse {
    pub request_id: Uuid,
    pub source: usize,
    pub destination: usize,
    pub shortest_distance: Option<u64>,
    pub almost_shortest_distance: Option<u64>,
    /// Edges excluded because they lie on a shortest path, sorted
    pub removed_edges: Vec<(usize, usize)>,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
