use axum::extract::{Path, State};
use recanto_core::domain::usuario::{
    entities::Usuario, ports::UsuarioService, value_objects::GetUsuarioInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetUsuarioResponse {
    pub data: Usuario,
}

#[utoipa::path(
    get,
    path = "/{usuario_id}",
    tag = "usuario",
    summary = "Get usuario",
    params(
        ("usuario_id" = Uuid, Path, description = "Usuario id"),
    ),
    responses(
        (status = 200, body = GetUsuarioResponse),
        (status = 404, description = "Usuario not found")
    )
)]
pub async fn get_usuario(
    Path(usuario_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetUsuarioResponse>, ApiError> {
    let usuario = state
        .service
        .get_usuario(identity, GetUsuarioInput { usuario_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsuarioResponse { data: usuario }))
}
