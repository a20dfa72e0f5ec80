use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    entities::SemiologiaNutricional, ports::RelatorioNutricionalService,
    value_objects::UpdateSemiologiaInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        semiologia_nutricional::validators::UpdateSemiologiaValidator,
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
pub struct UpdateSemiologiaResponse {
    pub data: SemiologiaNutricional,
}

#[utoipa::path(
    patch,
    path = "/{semiologia_id}",
    tag = "semiologia-nutricional",
    summary = "Update semiologia nutricional",
    params(
        ("semiologia_id" = Uuid, Path, description = "Semiologia id"),
    ),
    request_body = UpdateSemiologiaValidator,
    responses(
        (status = 200, body = UpdateSemiologiaResponse)
    )
)]
pub async fn update_semiologia(
    Path(semiologia_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateSemiologiaValidator>,
) -> Result<Response<UpdateSemiologiaResponse>, ApiError> {
    let semiologia = state
        .service
        .update_semiologia(
            identity,
            UpdateSemiologiaInput {
                semiologia_id,
                apetite: payload.apetite,
                mastigacao: payload.mastigacao,
                degluticao: payload.degluticao,
                funcionamento_intestinal: payload.funcionamento_intestinal,
                observacoes: payload.observacoes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateSemiologiaResponse { data: semiologia }))
}
