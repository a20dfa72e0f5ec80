use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_cargo::{__path_create_cargo, create_cargo},
    get_cargo::{__path_get_cargo, get_cargo},
    get_cargos::{__path_get_cargos, get_cargos},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_cargo, get_cargos, get_cargo))]
pub struct CargoApiDoc;

pub fn cargo_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/cargos", state.args.server.root_path),
            post(create_cargo).get(get_cargos),
        )
        .route(
            &format!("{}/cargos/{{cargo_id}}", state.args.server.root_path),
            get(get_cargo),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
