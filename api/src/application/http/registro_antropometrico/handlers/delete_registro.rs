use axum::extract::{Path, State};
use recanto_core::domain::relatorio_nutricional::{
    ports::RelatorioNutricionalService, value_objects::DeleteRegistroAntropometricoInput,
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
    path = "/{registro_id}",
    tag = "registro-antropometrico",
    summary = "Delete registro antropométrico",
    params(
        ("registro_id" = Uuid, Path, description = "Registro id"),
    ),
    responses(
        (status = 204, description = "Registro removed")
    )
)]
pub async fn delete_registro(
    Path(registro_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_registro_antropometrico(
            identity,
            DeleteRegistroAntropometricoInput { registro_id },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
