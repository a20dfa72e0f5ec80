use axum::extract::State;
use recanto_core::domain::relatorio_nutricional::{
    entities::RegistroAntropometrico, ports::RelatorioNutricionalService,
    value_objects::CreateRegistroAntropometricoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        registro_antropometrico::validators::CreateRegistroAntropometricoValidator,
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
pub struct CreateRegistroResponse {
    pub data: RegistroAntropometrico,
}

#[utoipa::path(
    post,
    path = "",
    tag = "registro-antropometrico",
    summary = "Create registro antropométrico",
    description = "BMI is computed server-side from weight and height.",
    request_body = CreateRegistroAntropometricoValidator,
    responses(
        (status = 201, body = CreateRegistroResponse)
    )
)]
pub async fn create_registro(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRegistroAntropometricoValidator>,
) -> Result<Response<CreateRegistroResponse>, ApiError> {
    let registro = state
        .service
        .create_registro_antropometrico(
            identity,
            CreateRegistroAntropometricoInput {
                id_idoso: payload.id_idoso,
                peso_kg: payload.peso_kg,
                altura_cm: payload.altura_cm,
                circunferencia_braco_cm: payload.circunferencia_braco_cm,
                circunferencia_panturrilha_cm: payload.circunferencia_panturrilha_cm,
                data_registro: payload.data_registro,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRegistroResponse { data: registro }))
}
