use axum::extract::{Path, State};
use recanto_core::domain::usuario::{
    entities::Usuario, ports::UsuarioService, value_objects::UpdateUsuarioInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        usuario::validators::UpdateUsuarioValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUsuarioResponse {
    pub data: Usuario,
}

#[utoipa::path(
    patch,
    path = "/{usuario_id}",
    tag = "usuario",
    summary = "Update usuario",
    params(
        ("usuario_id" = Uuid, Path, description = "Usuario id"),
    ),
    request_body = UpdateUsuarioValidator,
    responses(
        (status = 200, body = UpdateUsuarioResponse)
    )
)]
pub async fn update_usuario(
    Path(usuario_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateUsuarioValidator>,
) -> Result<Response<UpdateUsuarioResponse>, ApiError> {
    let usuario = state
        .service
        .update_usuario(
            identity,
            UpdateUsuarioInput {
                usuario_id,
                nome: payload.nome,
                email: payload.email,
                cpf_cnh: payload.cpf_cnh,
                id_cargo: payload.id_cargo,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateUsuarioResponse { data: usuario }))
}
