use axum::extract::{Path, State};
use recanto_core::domain::idoso::{
    entities::Idoso, ports::IdosoService, value_objects::GetIdosoInput,
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
pub struct GetIdosoResponse {
    pub data: Idoso,
}

#[utoipa::path(
    get,
    path = "/{idoso_id}",
    tag = "idoso",
    summary = "Get idoso",
    params(
        ("idoso_id" = Uuid, Path, description = "Idoso id"),
    ),
    responses(
        (status = 200, body = GetIdosoResponse),
        (status = 404, description = "Idoso not found")
    )
)]
pub async fn get_idoso(
    Path(idoso_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetIdosoResponse>, ApiError> {
    let idoso = state
        .service
        .get_idoso(identity, GetIdosoInput { idoso_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIdosoResponse { data: idoso }))
}
