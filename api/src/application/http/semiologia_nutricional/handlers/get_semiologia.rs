use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    entities::SemiologiaNutricional, ports::RelatorioNutricionalService,
    value_objects::GetSemiologiaInput,
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
pub struct GetSemiologiaResponse {
    pub data: SemiologiaNutricional,
}

#[utoipa::path(
    get,
    path = "/{semiologia_id}",
    tag = "semiologia-nutricional",
    summary = "Get semiologia nutricional",
    params(
        ("semiologia_id" = Uuid, Path, description = "Semiologia id"),
    ),
    responses(
        (status = 200, body = GetSemiologiaResponse),
        (status = 404, description = "Semiologia not found")
    )
)]
pub async fn get_semiologia(
    Path(semiologia_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSemiologiaResponse>, ApiError> {
    let semiologia = state
        .service
        .get_semiologia(identity, GetSemiologiaInput { semiologia_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSemiologiaResponse { data: semiologia }))
}
