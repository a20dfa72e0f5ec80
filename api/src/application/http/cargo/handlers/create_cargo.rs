use axum::extract::State;
use recanto_core::domain::cargo::{
    entities::Cargo, ports::CargoService, value_objects::CreateCargoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        cargo::validators::CreateCargoValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCargoResponse {
    pub data: Cargo,
}

#[utoipa::path(
    post,
    path = "",
    tag = "cargo",
    summary = "Create cargo",
    request_body = CreateCargoValidator,
    responses(
        (status = 201, body = CreateCargoResponse)
    )
)]
pub async fn create_cargo(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCargoValidator>,
) -> Result<Response<CreateCargoResponse>, ApiError> {
    let cargo = state
        .service
        .create_cargo(
            identity,
            CreateCargoInput {
                nome: payload.nome,
                descricao: payload.descricao,
                id_grupo_permissao: payload.id_grupo_permissao,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCargoResponse { data: cargo }))
}
