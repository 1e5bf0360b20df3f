use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::almost_shortest::AlmostShortestPath;
use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Shared application state. Holds limits only; graphs live for one request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            max_vertices: config.max_vertices,
            max_edges: config.max_edges,
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/almost-shortest", post(solve_almost_shortest))
        .route("/api/health", get(health_check))
}

/// Solve one almost-shortest-path query
pub async fn solve_almost_shortest(
    State(state): State<AppState>,
    Json(request): Json<AlmostShortestRequest>,
) -> Result<Json<AlmostShortestResponse>, ApiError> {
    if request.vertex_count > state.max_vertices || request.edges.len() > state.max_edges {
        return Err(bad_request(
            "graph_too_large",
            format!(
                "Graph with {} vertices and {} edges exceeds the limit of {} vertices and {} edges",
                request.vertex_count,
                request.edges.len(),
                state.max_vertices,
                state.max_edges
            ),
        ));
    }

    let graph = DirectedGraph::from_edges(
        request.vertex_count,
        request.edges.iter().map(|e| (e.from, e.to, e.weight)),
    )
    .map_err(|err| bad_request("invalid_graph", err.to_string()))?;

    let request_id = Uuid::new_v4();
    let start_time = Instant::now();
    let result = AlmostShortestPath::new()
        .solve(&graph, request.source, request.destination)
        .map_err(|err| match err {
            Error::SourceNotFound | Error::InvalidVertex(_) => bad_request("invalid_vertex", err.to_string()),
            other => {
                log::error!("Request {} failed: {}", request_id, other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("solver_failed", other.to_string())),
                )
            }
        })?;
    let execution_time = start_time.elapsed();

    log::info!(
        "Request {}: {} -> {} answered {} in {:?}",
        request_id,
        request.source,
        request.destination,
        result.answer(),
        execution_time
    );

    let mut removed_edges: Vec<(usize, usize)> = result.removed_edges.into_iter().collect();
    removed_edges.sort_unstable();

    Ok(Json(AlmostShortestResponse {
        request_id,
        source: result.source,
        destination: result.destination,
        shortest_distance: result.shortest_distance,
        almost_shortest_distance: result.almost_shortest_distance,
        removed_edges,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: chrono::Utc::now(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn bad_request(error: &str, message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error, message)))
}
