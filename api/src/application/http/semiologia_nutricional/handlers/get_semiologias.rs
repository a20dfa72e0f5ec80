use axum::extract::State;
use recanto_core::domain::relatorio_nutricional::{
    entities::SemiologiaNutricional, ports::RelatorioNutricionalService,
    value_objects::GetSemiologiasInput,
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
pub struct GetSemiologiasResponse {
    pub data: Vec<SemiologiaNutricional>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "semiologia-nutricional",
    summary = "List semiologias nutricionais",
    description = "Lists semiologias; filter by resident with \
        `?filter[0][path]=id_idoso&filter[0][operator]=equals&filter[0][value]=<uuid>`.",
    responses(
        (status = 200, body = GetSemiologiasResponse)
    )
)]
pub async fn get_semiologias(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetSemiologiasResponse>, ApiError> {
    let page = state
        .service
        .get_semiologias(identity, GetSemiologiasInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetSemiologiasResponse {
        data: page.items,
        meta,
    }))
}
