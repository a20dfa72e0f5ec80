use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    ports::RelatorioNutricionalService, value_objects::DeleteSemiologiaInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{semiologia_id}",
    tag = "semiologia-nutricional",
    summary = "Delete semiologia nutricional",
    params(
        ("semiologia_id" = Uuid, Path, description = "Semiologia id"),
    ),
    responses(
        (status = 204, description = "Semiologia removed")
    )
)]
pub async fn delete_semiologia(
    Path(semiologia_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_semiologia(identity, DeleteSemiologiaInput { semiologia_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
