use axum::extract::{Path, State};
use recanto_core::domain::modelo_pia::{
    ports::ModeloPiaService, value_objects::DeleteModeloPiaInput,
};
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
    path = "/{modelo_id}",
    tag = "modelo-pia",
    summary = "Delete modelo de relatório PIA",
    params(
        ("modelo_id" = Uuid, Path, description = "Modelo id"),
    ),
    responses(
        (status = 204, description = "Modelo removed")
    )
)]
pub async fn delete_modelo_pia(
    Path(modelo_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_modelo_pia(identity, DeleteModeloPiaInput { modelo_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
