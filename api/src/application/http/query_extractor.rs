use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use recanto_core::domain::query::entities::RawQueryRequest;

use super::query_params;

/// Extractor for the list-query wire format.
///
/// Usage:
/// ```ignore
/// async fn handler(
///     QueryParamsExtractor(query): QueryParamsExtractor,
/// ) -> Result<Response, ApiError> {
///     // pass `query` to the service; normalization happens in core
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub RawQueryRequest);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryParamsExtractor(query_params::from_query_map(
            &query_map,
        )))
    }
}
