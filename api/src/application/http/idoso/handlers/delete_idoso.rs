use axum::extract::{Path, State};
use recanto_core::domain::idoso::{ports::IdosoService, value_objects::DeleteIdosoInput};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{idoso_id}",
    tag = "idoso",
    summary = "Delete idoso",
    description = "Soft delete: the idoso is deactivated, never removed.",
    params(
        ("idoso_id" = Uuid, Path, description = "Idoso id"),
    ),
    responses(
        (status = 204, description = "Idoso deactivated")
    )
)]
pub async fn delete_idoso(
    Path(idoso_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_idoso(identity, DeleteIdosoInput { idoso_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
