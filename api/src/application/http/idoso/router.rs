use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_idoso::{__path_create_idoso, create_idoso},
    delete_idoso::{__path_delete_idoso, delete_idoso},
    get_idoso::{__path_get_idoso, get_idoso},
    get_idosos::{__path_get_idosos, get_idosos},
    update_idoso::{__path_update_idoso, update_idoso},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_idoso, get_idosos, get_idoso, update_idoso, delete_idoso))]
pub struct IdosoApiDoc;

pub fn idoso_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/idosos", state.args.server.root_path),
            post(create_idoso).get(get_idosos),
        )
        .route(
            &format!("{}/idosos/{{idoso_id}}", state.args.server.root_path),
            get(get_idoso).patch(update_idoso).delete(delete_idoso),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
