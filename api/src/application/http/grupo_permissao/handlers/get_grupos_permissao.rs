use axum::extract::State;
use recanto_core::domain::grupo_permissao::{
    entities::GrupoPermissao, ports::GrupoPermissaoService,
    value_objects::GetGruposPermissaoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_extractor::QueryParamsExtractor,
        server::{
            api_entities::{api_error::ApiError, response::{Response, ResponseMeta}},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetGruposPermissaoResponse {
    pub data: Vec<GrupoPermissao>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "grupo-permissao",
    summary = "List grupos de permissão",
    responses(
        (status = 200, body = GetGruposPermissaoResponse)
    )
)]
pub async fn get_grupos_permissao(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetGruposPermissaoResponse>, ApiError> {
    let page = state
        .service
        .get_grupos_permissao(identity, GetGruposPermissaoInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetGruposPermissaoResponse {
        data: page.items,
        meta,
    }))
}
