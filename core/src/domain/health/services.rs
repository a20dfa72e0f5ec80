use crate::domain::{
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, services::Service},
    grupo_permissao::ports::GrupoPermissaoRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    idoso::ports::IdosoRepository,
    modelo_pia::ports::ModeloPiaRepository,
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

impl<U, CA, G, I, M, SN, RA, H, OS> HealthCheckService for Service<U, CA, G, I, M, SN, RA, H, OS>
where
    U: UsuarioRepository,
    CA: CargoRepository,
    G: GrupoPermissaoRepository,
    I: IdosoRepository,
    M: ModeloPiaRepository,
    SN: SemiologiaNutricionalRepository,
    RA: RegistroAntropometricoRepository,
    H: HealthCheckRepository,
    OS: ObjectStoragePort,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
