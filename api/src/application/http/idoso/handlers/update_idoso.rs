use axum::extract::{Path, State};
use recanto_core::domain::idoso::{
    entities::Idoso, ports::IdosoService, value_objects::UpdateIdosoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        idoso::validators::UpdateIdosoValidator,
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
pub struct UpdateIdosoResponse {
    pub data: Idoso,
}

#[utoipa::path(
    patch,
    path = "/{idoso_id}",
    tag = "idoso",
    summary = "Update idoso",
    params(
        ("idoso_id" = Uuid, Path, description = "Idoso id"),
    ),
    request_body = UpdateIdosoValidator,
    responses(
        (status = 200, body = UpdateIdosoResponse)
    )
)]
pub async fn update_idoso(
    Path(idoso_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateIdosoValidator>,
) -> Result<Response<UpdateIdosoResponse>, ApiError> {
    let idoso = state
        .service
        .update_idoso(
            identity,
            UpdateIdosoInput {
                idoso_id,
                nome: payload.nome,
                data_nascimento: payload.data_nascimento,
                sexo: payload.sexo,
                quarto: payload.quarto,
                observacoes: payload.observacoes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIdosoResponse { data: idoso }))
}
