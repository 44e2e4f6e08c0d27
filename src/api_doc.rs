use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::ShortestPathQuery;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "campus-nav API",
        version = "1.0.0",
        description = "Shortest routes between named locations in a building"
    ),
    paths(
        handlers::health::health_handler,
        handlers::rooms::rooms_handler,
        handlers::shortest_path::shortest_path_handler
    ),
    components(
        schemas(
            ShortestPathQuery,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "navigation", description = "Location listing and route finding")
    )
)]
pub struct ApiDoc;
