use axum::extract::{Path, State};
use recanto_core::domain::modelo_pia::{
    entities::ModeloRelatorioPia, ports::ModeloPiaService, value_objects::GetModeloPiaInput,
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
pub struct GetModeloPiaResponse {
    pub data: ModeloRelatorioPia,
}

#[utoipa::path(
    get,
    path = "/{modelo_id}",
    tag = "modelo-pia",
    summary = "Get modelo de relatório PIA",
    params(
        ("modelo_id" = Uuid, Path, description = "Modelo id"),
    ),
    responses(
        (status = 200, body = GetModeloPiaResponse),
        (status = 404, description = "Modelo not found")
    )
)]
pub async fn get_modelo_pia(
    Path(modelo_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetModeloPiaResponse>, ApiError> {
    let modelo = state
        .service
        .get_modelo_pia(identity, GetModeloPiaInput { modelo_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetModeloPiaResponse { data: modelo }))
}
