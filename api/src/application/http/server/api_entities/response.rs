use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use recanto_core::domain::query::entities::QueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Typed handler response; serialized as JSON with the matching status.
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    NoContent,
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Response::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Pagination metadata of a list envelope: `{ data, meta }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseMeta {
    pub page_limit: u64,
    pub page_number: u64,
    pub total_count: u64,
}

impl<T> From<&QueryResult<T>> for ResponseMeta {
    fn from(result: &QueryResult<T>) -> Self {
        Self {
            page_limit: result.page_limit,
            page_number: result.page_number,
            total_count: result.total_count,
        }
    }
}
