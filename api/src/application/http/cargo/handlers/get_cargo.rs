use axum::extract::{Path, State};
use recanto_core::domain::cargo::{
    entities::Cargo, ports::CargoService, value_objects::GetCargoInput,
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
pub struct GetCargoResponse {
    pub data: Cargo,
}

#[utoipa::path(
    get,
    path = "/{cargo_id}",
    tag = "cargo",
    summary = "Get cargo",
    params(
        ("cargo_id" = Uuid, Path, description = "Cargo id"),
    ),
    responses(
        (status = 200, body = GetCargoResponse),
        (status = 404, description = "Cargo not found")
    )
)]
pub async fn get_cargo(
    Path(cargo_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetCargoResponse>, ApiError> {
    let cargo = state
        .service
        .get_cargo(identity, GetCargoInput { cargo_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCargoResponse { data: cargo }))
}
