use axum::extract::State;
use recanto_core::domain::idoso::{
    entities::Idoso, ports::IdosoService, value_objects::GetIdososInput,
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
pub struct GetIdososResponse {
    pub data: Vec<Idoso>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "idoso",
    summary = "List idosos",
    description = "Lists idosos with the shared filter/sort/pagination contract, e.g. \
        `?filter[0][path]=situacao&filter[0][operator]=equals&filter[0][value]=ATIVO`.",
    responses(
        (status = 200, body = GetIdososResponse)
    )
)]
pub async fn get_idosos(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetIdososResponse>, ApiError> {
    let page = state
        .service
        .get_idosos(identity, GetIdososInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetIdososResponse {
        data: page.items,
        meta,
    }))
}
