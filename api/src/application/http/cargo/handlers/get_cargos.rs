use axum::extract::State;
use recanto_core::domain::cargo::{
    entities::Cargo, ports::CargoService, value_objects::GetCargosInput,
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
pub struct GetCargosResponse {
    pub data: Vec<Cargo>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "cargo",
    summary = "List cargos",
    responses(
        (status = 200, body = GetCargosResponse)
    )
)]
pub async fn get_cargos(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetCargosResponse>, ApiError> {
    let page = state
        .service
        .get_cargos(identity, GetCargosInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetCargosResponse {
        data: page.items,
        meta,
    }))
}
