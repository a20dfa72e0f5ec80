use axum::extract::State;
use recanto_core::domain::relatorio_nutricional::{
    entities::RegistroAntropometrico, ports::RelatorioNutricionalService,
    value_objects::GetRegistrosAntropometricosInput,
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
pub struct GetRegistrosResponse {
    pub data: Vec<RegistroAntropometrico>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "registro-antropometrico",
    summary = "List registros antropométricos",
    responses(
        (status = 200, body = GetRegistrosResponse)
    )
)]
pub async fn get_registros(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetRegistrosResponse>, ApiError> {
    let page = state
        .service
        .get_registros_antropometricos(identity, GetRegistrosAntropometricosInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetRegistrosResponse {
        data: page.items,
        meta,
    }))
}
