use axum::extract::{Path, State};
use recanto_core::domain::grupo_permissao::{
    entities::GrupoPermissao, ports::GrupoPermissaoService, value_objects::GetGrupoPermissaoInput,
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
pub struct GetGrupoPermissaoResponse {
    pub data: GrupoPermissao,
}

#[utoipa::path(
    get,
    path = "/{grupo_id}",
    tag = "grupo-permissao",
    summary = "Get grupo de permissão",
    params(
        ("grupo_id" = Uuid, Path, description = "Grupo id"),
    ),
    responses(
        (status = 200, body = GetGrupoPermissaoResponse),
        (status = 404, description = "Grupo not found")
    )
)]
pub async fn get_grupo_permissao(
    Path(grupo_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetGrupoPermissaoResponse>, ApiError> {
    let grupo = state
        .service
        .get_grupo_permissao(identity, GetGrupoPermissaoInput { grupo_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGrupoPermissaoResponse { data: grupo }))
}
