use axum::extract::State;
use recanto_core::domain::modelo_pia::{
    entities::ModeloRelatorioPia, ports::ModeloPiaService, value_objects::CreateModeloPiaInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        modelo_pia::validators::CreateModeloPiaValidator,
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
pub struct CreateModeloPiaResponse {
    pub data: ModeloRelatorioPia,
}

#[utoipa::path(
    post,
    path = "",
    tag = "modelo-pia",
    summary = "Create modelo de relatório PIA",
    request_body = CreateModeloPiaValidator,
    responses(
        (status = 201, body = CreateModeloPiaResponse)
    )
)]
pub async fn create_modelo_pia(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateModeloPiaValidator>,
) -> Result<Response<CreateModeloPiaResponse>, ApiError> {
    let modelo = state
        .service
        .create_modelo_pia(
            identity,
            CreateModeloPiaInput {
                nome: payload.nome,
                estrutura: payload.estrutura,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateModeloPiaResponse { data: modelo }))
}
