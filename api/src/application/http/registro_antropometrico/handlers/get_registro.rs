use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    entities::RegistroAntropometrico, ports::RelatorioNutricionalService,
    value_objects::GetRegistroAntropometricoInput,
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
pub struct GetRegistroResponse {
    pub data: RegistroAntropometrico,
}

#[utoipa::path(
    get,
    path = "/{registro_id}",
    tag = "registro-antropometrico",
    summary = "Get registro antropométrico",
    params(
        ("registro_id" = Uuid, Path, description = "Registro id"),
    ),
    responses(
        (status = 200, body = GetRegistroResponse),
        (status = 404, description = "Registro not found")
    )
)]
pub async fn get_registro(
    Path(registro_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRegistroResponse>, ApiError> {
    let registro = state
        .service
        .get_registro_antropometrico(identity, GetRegistroAntropometricoInput { registro_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRegistroResponse { data: registro }))
}
