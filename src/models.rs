use serde::Deserialize;

/// Query parameters for the shortest path endpoint
///
/// Both are optional at the extractor level so a missing name produces a JSON
/// error body. Undecodable query strings are caught by the handler.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ShortestPathQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}
