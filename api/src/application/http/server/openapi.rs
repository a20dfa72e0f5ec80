use utoipa::OpenApi;

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, cargo::router::CargoApiDoc,
    grupo_permissao::router::GrupoPermissaoApiDoc, health::HealthApiDoc,
    idoso::router::IdosoApiDoc, modelo_pia::router::ModeloPiaApiDoc,
    registro_antropometrico::router::RegistroAntropometricoApiDoc,
    semiologia_nutricional::router::SemiologiaNutricionalApiDoc, usuario::router::UsuarioApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recanto API",
        description = "Management API for a long-term elder-care facility (ILPI)."
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/usuarios", api = UsuarioApiDoc),
        (path = "/cargos", api = CargoApiDoc),
        (path = "/grupos-permissao", api = GrupoPermissaoApiDoc),
        (path = "/idosos", api = IdosoApiDoc),
        (path = "/modelo-relatorio-pia", api = ModeloPiaApiDoc),
        (path = "/semiologia-nutricional", api = SemiologiaNutricionalApiDoc),
        (path = "/registro-antropometrico", api = RegistroAntropometricoApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
