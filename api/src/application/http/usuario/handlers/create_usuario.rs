use axum::extract::State;
use recanto_core::domain::usuario::{
    entities::Usuario, ports::UsuarioService, value_objects::CreateUsuarioInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
        usuario::validators::CreateUsuarioValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUsuarioResponse {
    pub data: Usuario,
}

#[utoipa::path(
    post,
    path = "",
    tag = "usuario",
    summary = "Create usuario",
    request_body = CreateUsuarioValidator,
    responses(
        (status = 201, body = CreateUsuarioResponse)
    )
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateUsuarioValidator>,
) -> Result<Response<CreateUsuarioResponse>, ApiError> {
    let usuario = state
        .service
        .create_usuario(
            identity,
            CreateUsuarioInput {
                nome: payload.nome,
                email: payload.email,
                cpf_cnh: payload.cpf_cnh,
                senha: payload.senha,
                id_cargo: payload.id_cargo,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateUsuarioResponse { data: usuario }))
}
