use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_grupo_permissao::{__path_get_grupo_permissao, get_grupo_permissao},
    get_grupos_permissao::{__path_get_grupos_permissao, get_grupos_permissao},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_grupos_permissao, get_grupo_permissao))]
pub struct GrupoPermissaoApiDoc;

pub fn grupo_permissao_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/grupos-permissao", state.args.server.root_path),
            get(get_grupos_permissao),
        )
        .route(
            &format!(
                "{}/grupos-permissao/{{grupo_id}}",
                state.args.server.root_path
            ),
            get(get_grupo_permissao),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
