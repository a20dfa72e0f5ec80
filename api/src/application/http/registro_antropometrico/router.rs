use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_registro::{__path_create_registro, create_registro},
    delete_registro::{__path_delete_registro, delete_registro},
    get_registro::{__path_get_registro, get_registro},
    get_registros::{__path_get_registros, get_registros},
    update_registro::{__path_update_registro, update_registro},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_registro,
    get_registros,
    get_registro,
    update_registro,
    delete_registro
))]
pub struct RegistroAntropometricoApiDoc;

pub fn registro_antropometrico_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/registro-antropometrico", state.args.server.root_path),
            post(create_registro).get(get_registros),
        )
        .route(
            &format!(
                "{}/registro-antropometrico/{{registro_id}}",
                state.args.server.root_path
            ),
            get(get_registro)
                .patch(update_registro)
                .delete(delete_registro),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
