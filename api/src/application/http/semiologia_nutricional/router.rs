use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_semiologia::{__path_create_semiologia, create_semiologia},
    delete_semiologia::{__path_delete_semiologia, delete_semiologia},
    get_semiologia::{__path_get_semiologia, get_semiologia},
    get_semiologias::{__path_get_semiologias, get_semiologias},
    update_semiologia::{__path_update_semiologia, update_semiologia},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_semiologia,
    get_semiologias,
    get_semiologia,
    update_semiologia,
    delete_semiologia
))]
pub struct SemiologiaNutricionalApiDoc;

pub fn semiologia_nutricional_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/semiologia-nutricional", state.args.server.root_path),
            post(create_semiologia).get(get_semiologias),
        )
        .route(
            &format!(
                "{}/semiologia-nutricional/{{semiologia_id}}",
                state.args.server.root_path
            ),
            get(get_semiologia)
                .patch(update_semiologia)
                .delete(delete_semiologia),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
