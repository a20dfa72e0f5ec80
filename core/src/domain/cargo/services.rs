use crate::domain::{
    authentication::value_objects::Identity,
    cargo::{
        entities::{Cargo, QUERY_SCHEMA},
        ports::{CargoRepository, CargoService},
        value_objects::{CreateCargoInput, GetCargoInput, GetCargosInput},
    },
    common::{entities::app_errors::CoreError, policies::ensure_permission, services::Service},
    grupo_permissao::{entities::codes, ports::GrupoPermissaoRepository},
    health::ports::HealthCheckRepository,
    idoso::ports::IdosoRepository,
    modelo_pia::ports::ModeloPiaRepository,
    query::{entities::QueryResult, normalizer, services::fetch_paged},
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

impl<U, CA, G, I, M, SN, RA, H, OS> CargoService for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn create_cargo(
        &self,
        identity: Identity,
        input: CreateCargoInput,
    ) -> Result<Cargo, CoreError> {
        ensure_permission(&identity, codes::CARGO_CRIAR)?;

        self.grupo_permissao_repository
            .get_by_id(input.id_grupo_permissao)
            .await?
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "grupo de permissão {} não existe",
                    input.id_grupo_permissao
                ))
            })?;

        let cargo = Cargo::new(input.nome, input.descricao, input.id_grupo_permissao);

        self.cargo_repository.create(cargo).await
    }

    async fn get_cargos(
        &self,
        identity: Identity,
        input: GetCargosInput,
    ) -> Result<QueryResult<Cargo>, CoreError> {
        ensure_permission(&identity, codes::CARGO_LER)?;

        let request = normalizer::normalize(&input.query, &QUERY_SCHEMA)?;
        let page = fetch_paged(&self.cargo_repository, &request).await?;

        Ok(page)
    }

    async fn get_cargo(&self, identity: Identity, input: GetCargoInput) -> Result<Cargo, CoreError> {
        ensure_permission(&identity, codes::CARGO_LER)?;

        self.cargo_repository
            .get_by_id(input.cargo_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
