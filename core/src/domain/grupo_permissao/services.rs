use crate::domain::{
    authentication::value_objects::Identity,
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, policies::ensure_permission, services::Service},
    grupo_permissao::{
        entities::{GrupoPermissao, QUERY_SCHEMA, codes},
        ports::{GrupoPermissaoRepository, GrupoPermissaoService},
        value_objects::{GetGrupoPermissaoInput, GetGruposPermissaoInput},
    },
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

impl<U, CA, G, I, M, SN, RA, H, OS> GrupoPermissaoService for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn get_grupos_permissao(
        &self,
        identity: Identity,
        input: GetGruposPermissaoInput,
    ) -> Result<QueryResult<GrupoPermissao>, CoreError> {
        ensure_permission(&identity, codes::GRUPO_PERMISSAO_LER)?;

        let request = normalizer::normalize(&input.query, &QUERY_SCHEMA)?;
        let page = fetch_paged(&self.grupo_permissao_repository, &request).await?;

        Ok(page)
    }

    async fn get_grupo_permissao(
        &self,
        identity: Identity,
        input: GetGrupoPermissaoInput,
    ) -> Result<GrupoPermissao, CoreError> {
        ensure_permission(&identity, codes::GRUPO_PERMISSAO_LER)?;

        self.grupo_permissao_repository
            .get_by_id(input.grupo_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
