use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /rooms handler - List every known location name, sorted
#[utoipa::path(
    get,
    path = routes::ROOMS,
    responses(
        (status = 200, description = "All location names in ascending order", body = Vec<String>)
    ),
    tag = "navigation"
)]
pub async fn rooms_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<String>>) {
    let rooms = state.graph.sorted_locations();
    tracing::debug!("Listed {} rooms", rooms.len());
    (StatusCode::OK, Json(rooms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, routing::get, Router};
    use std::path::Path;
    use tower::ServiceExt;

    async fn fetch_rooms(config: Config) -> Vec<String> {
        let state = AppState::from_config(config).unwrap();
        let app = Router::new()
            .route(crate::routes::ROOMS, get(rooms_handler))
            .with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/rooms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_rooms_builtin_graph() {
        let rooms = fetch_rooms(Config {
            graph_file: None,
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        })
        .await;

        assert_eq!(rooms, vec!["LAB", "LIBRARY", "VERANDAH"]);
    }

    #[tokio::test]
    async fn test_rooms_graph_file() {
        let rooms = fetch_rooms(Config {
            graph_file: Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/building.json")),
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        })
        .await;

        assert_eq!(
            rooms,
            vec![
                "ATRIUM",
                "CAFETERIA",
                "CORRIDOR_A",
                "LAB",
                "LIBRARY",
                "READING_ROOM",
                "STAFF_ROOM",
                "VERANDAH",
            ]
        );
    }
}
