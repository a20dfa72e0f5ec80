use axum::extract::State;
use recanto_core::domain::idoso::{
    entities::Idoso, ports::IdosoService, value_objects::CreateIdosoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        idoso::validators::CreateIdosoValidator,
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
pub struct CreateIdosoResponse {
    pub data: Idoso,
}

#[utoipa::path(
    post,
    path = "",
    tag = "idoso",
    summary = "Create idoso",
    request_body = CreateIdosoValidator,
    responses(
        (status = 201, body = CreateIdosoResponse),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn create_idoso(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateIdosoValidator>,
) -> Result<Response<CreateIdosoResponse>, ApiError> {
    let idoso = state
        .service
        .create_idoso(
            identity,
            CreateIdosoInput {
                nome: payload.nome,
                cpf: payload.cpf,
                data_nascimento: payload.data_nascimento,
                sexo: payload.sexo,
                quarto: payload.quarto,
                observacoes: payload.observacoes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIdosoResponse { data: idoso }))
}
