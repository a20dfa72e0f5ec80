use axum::extract::State;
use recanto_core::domain::modelo_pia::{
    entities::ModeloRelatorioPia, ports::ModeloPiaService, value_objects::GetModelosPiaInput,
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
pub struct GetModelosPiaResponse {
    pub data: Vec<ModeloRelatorioPia>,
    pub meta: ResponseMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "modelo-pia",
    summary = "List modelos de relatório PIA",
    responses(
        (status = 200, body = GetModelosPiaResponse)
    )
)]
pub async fn get_modelos_pia(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetModelosPiaResponse>, ApiError> {
    let page = state
        .service
        .get_modelos_pia(identity, GetModelosPiaInput { query })
        .await
        .map_err(ApiError::from)?;

    let meta = ResponseMeta::from(&page);

    Ok(Response::OK(GetModelosPiaResponse {
        data: page.items,
        meta,
    }))
}
