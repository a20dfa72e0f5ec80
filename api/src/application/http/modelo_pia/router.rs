use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_modelo_pia::{__path_create_modelo_pia, create_modelo_pia},
    delete_modelo_pia::{__path_delete_modelo_pia, delete_modelo_pia},
    get_modelo_pia::{__path_get_modelo_pia, get_modelo_pia},
    get_modelos_pia::{__path_get_modelos_pia, get_modelos_pia},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_modelo_pia, get_modelos_pia, get_modelo_pia, delete_modelo_pia))]
pub struct ModeloPiaApiDoc;

pub fn modelo_pia_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/modelo-relatorio-pia", state.args.server.root_path),
            post(create_modelo_pia).get(get_modelos_pia),
        )
        .route(
            &format!(
                "{}/modelo-relatorio-pia/{{modelo_id}}",
                state.args.server.root_path
            ),
            get(get_modelo_pia).delete(delete_modelo_pia),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
