use axum::extract::State;
use recanto_core::domain::relatorio_nutricional::{
    entities::SemiologiaNutricional, ports::RelatorioNutricionalService,
    value_objects::CreateSemiologiaInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        semiologia_nutricional::validators::CreateSemiologiaValidator,
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
pub struct CreateSemiologiaResponse {
    pub data: SemiologiaNutricional,
}

#[utoipa::path(
    post,
    path = "",
    tag = "semiologia-nutricional",
    summary = "Create semiologia nutricional",
    request_body = CreateSemiologiaValidator,
    responses(
        (status = 201, body = CreateSemiologiaResponse)
    )
)]
pub async fn create_semiologia(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateSemiologiaValidator>,
) -> Result<Response<CreateSemiologiaResponse>, ApiError> {
    let semiologia = state
        .service
        .create_semiologia(
            identity,
            CreateSemiologiaInput {
                id_idoso: payload.id_idoso,
                apetite: payload.apetite,
                mastigacao: payload.mastigacao,
                degluticao: payload.degluticao,
                funcionamento_intestinal: payload.funcionamento_intestinal,
                observacoes: payload.observacoes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateSemiologiaResponse {
        data: semiologia,
    }))
}
