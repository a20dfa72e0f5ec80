use axum::extract::{Path, State};
use recanto_core::domain::usuario::{ports::UsuarioService, value_objects::DeleteUsuarioInput};
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
    path = "/{usuario_id}",
    tag = "usuario",
    summary = "Delete usuario",
    description = "Soft delete: the usuario is deactivated, never removed.",
    params(
        ("usuario_id" = Uuid, Path, description = "Usuario id"),
    ),
    responses(
        (status = 204, description = "Usuario deactivated")
    )
)]
pub async fn delete_usuario(
    Path(usuario_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_usuario(identity, DeleteUsuarioInput { usuario_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
