use crate::error::{ApiError, ErrorResponse};
use crate::models::ShortestPathQuery;
use crate::pathfinder;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

/// GET /shortest_path handler - Minimum-weight route between two locations
///
/// Names are matched exactly as given. On success the body is the ordered
/// list of locations from `start` to `end` inclusive.
#[utoipa::path(
    get,
    path = routes::SHORTEST_PATH,
    params(
        ("start" = String, Query, description = "Name of the starting location"),
        ("end" = String, Query, description = "Name of the destination location")
    ),
    responses(
        (status = 200, description = "Ordered locations along the route", body = Vec<String>),
        (status = 400, description = "Unknown location, missing or malformed parameter", body = ErrorResponse),
        (status = 404, description = "No route connects the two locations", body = ErrorResponse)
    ),
    tag = "navigation"
)]
pub async fn shortest_path_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortestPathQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    let Query(query) = query?;
    let start = query.start.ok_or(ApiError::MissingQueryParam("start"))?;
    let end = query.end.ok_or(ApiError::MissingQueryParam("end"))?;

    let path = pathfinder::find_path(&state.graph, &start, &end).map_err(|err| {
        tracing::info!("Route query {} -> {} rejected: {}", start, end, err);
        ApiError::from(err)
    })?;

    tracing::info!(
        "Route {} -> {}: {} hops, cost {}",
        start,
        end,
        path.hops(),
        path.cost
    );
    Ok((StatusCode::OK, Json(path.locations)))
}
