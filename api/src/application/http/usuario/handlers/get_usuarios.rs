use axum::extract::State;
use recanto_core::domain::usuario::{
    entities::Usuario, ports::UsuarioService, value_objects::GetUsuariosInput,
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
pub struct GetUsuariosResponse {
    pub data: Vec<Usuario>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "usuario",
    summary = "List usuarios",
    description = "Lists usuarios with the shared filter/sort/pagination contract.",
    responses(
        (status = 200, body = GetUsuariosResponse)
    )
)]
pub async fn get_usuarios(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetUsuariosResponse>, ApiError> {
    let page = state
        .service
        .get_usuarios(identity, GetUsuariosInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetUsuariosResponse {
        data: page.items,
        meta,
    }))
}
