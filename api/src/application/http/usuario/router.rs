use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_usuario::{__path_create_usuario, create_usuario},
    delete_usuario::{__path_delete_usuario, delete_usuario},
    get_usuario::{__path_get_usuario, get_usuario},
    get_usuarios::{__path_get_usuarios, get_usuarios},
    update_usuario::{__path_update_usuario, update_usuario},
    upload_foto::{__path_upload_foto, upload_foto},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_usuario,
    get_usuarios,
    get_usuario,
    update_usuario,
    delete_usuario,
    upload_foto
))]
pub struct UsuarioApiDoc;

pub fn usuario_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/usuarios", state.args.server.root_path),
            post(create_usuario).get(get_usuarios),
        )
        .route(
            &format!("{}/usuarios/{{usuario_id}}", state.args.server.root_path),
            get(get_usuario)
                .patch(update_usuario)
                .delete(delete_usuario),
        )
        .route(
            &format!(
                "{}/usuarios/{{usuario_id}}/upload-foto",
                state.args.server.root_path
            ),
            post(upload_foto),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
