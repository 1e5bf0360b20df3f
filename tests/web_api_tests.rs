use almost_sssp::web::api::{health_check, solve_almost_shortest, AppState};
use almost_sssp::web::models::{AlmostShortestRequest, WebEdge};
use almost_sssp::web::server::ServerConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

fn edge(from: usize, to: usize, weight: u64) -> WebEdge {
    WebEdge { from, to, weight }
}

fn state() -> AppState {
    AppState::new(&ServerConfig::default())
}

#[tokio::test]
async fn test_solve_alternate_route() {
    let request = AlmostShortestRequest {
        vertex_count: 4,
        source: 0,
        destination: 3,
        edges: vec![edge(0, 1, 1), edge(1, 3, 1), edge(0, 2, 1), edge(2, 3, 1), edge(0, 3, 5)],
    };

    let Json(response) = solve_almost_shortest(State(state()), Json(request)).await.unwrap();

    assert_eq!(response.shortest_distance, Some(2));
    assert_eq!(response.almost_shortest_distance, Some(5));
    assert_eq!(response.removed_edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
}

#[tokio::test]
async fn test_solve_no_path() {
    let request = AlmostShortestRequest {
        vertex_count: 2,
        source: 0,
        destination: 1,
        edges: vec![edge(0, 1, 3)],
    };

    let Json(response) = solve_almost_shortest(State(state()), Json(request)).await.unwrap();

    assert_eq!(response.shortest_distance, Some(3));
    assert_eq!(response.almost_shortest_distance, None);
}

#[tokio::test]
async fn test_invalid_edge_rejected() {
    let request = AlmostShortestRequest {
        vertex_count: 2,
        source: 0,
        destination: 1,
        edges: vec![edge(0, 4, 3)],
    };

    let (status, Json(error)) = solve_almost_shortest(State(state()), Json(request)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_graph");
}

#[tokio::test]
async fn test_invalid_destination_rejected() {
    let request = AlmostShortestRequest {
        vertex_count: 2,
        source: 0,
        destination: 7,
        edges: vec![],
    };

    let (status, Json(error)) = solve_almost_shortest(State(state()), Json(request)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_vertex");
}

#[tokio::test]
async fn test_oversized_graph_rejected() {
    let limited = AppState {
        max_vertices: 10,
        max_edges: 10,
    };
    let request = AlmostShortestRequest {
        vertex_count: 11,
        source: 0,
        destination: 1,
        edges: vec![],
    };

    let (status, Json(error)) = solve_almost_shortest(State(limited), Json(request)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "graph_too_large");
}

#[tokio::test]
async fn test_health_check() {
    let Json(body) = health_check().await;
    assert_eq!(body["status"], "healthy");
}
