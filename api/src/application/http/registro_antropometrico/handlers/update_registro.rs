use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    entities::RegistroAntropometrico, ports::RelatorioNutricionalService,
    value_objects::UpdateRegistroAntropometricoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        registro_antropometrico::validators::UpdateRegistroAntropometricoValidator,
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
pub struct UpdateRegistroResponse {
    pub data: RegistroAntropometrico,
}

#[utoipa::path(
    patch,
    path = "/{registro_id}",
    tag = "registro-antropometrico",
    summary = "Update registro antropométrico",
    params(
        ("registro_id" = Uuid, Path, description = "Registro id"),
    ),
    request_body = UpdateRegistroAntropometricoValidator,
    responses(
        (status = 200, body = UpdateRegistroResponse)
    )
)]
pub async fn update_registro(
    Path(registro_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRegistroAntropometricoValidator>,
) -> Result<Response<UpdateRegistroResponse>, ApiError> {
    let registro = state
        .service
        .update_registro_antropometrico(
            identity,
            UpdateRegistroAntropometricoInput {
                registro_id,
                peso_kg: payload.peso_kg,
                altura_cm: payload.altura_cm,
                circunferencia_braco_cm: payload.circunferencia_braco_cm,
                circunferencia_panturrilha_cm: payload.circunferencia_panturrilha_cm,
                data_registro: payload.data_registro,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRegistroResponse { data: registro }))
}
