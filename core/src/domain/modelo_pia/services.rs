use crate::domain::{
    authentication::value_objects::Identity,
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, policies::ensure_permission, services::Service},
    grupo_permissao::{entities::codes, ports::GrupoPermissaoRepository},
    health::ports::HealthCheckRepository,
    idoso::ports::IdosoRepository,
    modelo_pia::{
        entities::{ModeloRelatorioPia, QUERY_SCHEMA},
        ports::{ModeloPiaRepository, ModeloPiaService},
        value_objects::{
            CreateModeloPiaInput, DeleteModeloPiaInput, GetModeloPiaInput, GetModelosPiaInput,
        },
    },
    query::{entities::QueryResult, normalizer, services::fetch_paged},
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

impl<U, CA, G, I, M, SN, RA, H, OS> ModeloPiaService for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn create_modelo_pia(
        &self,
        identity: Identity,
        input: CreateModeloPiaInput,
    ) -> Result<ModeloRelatorioPia, CoreError> {
        ensure_permission(&identity, codes::MODELO_PIA_CRIAR)?;

        let modelo = ModeloRelatorioPia::new(input.nome, input.estrutura, identity.usuario.id);

        self.modelo_pia_repository.create(modelo).await
    }

    async fn get_modelos_pia(
        &self,
        identity: Identity,
        input: GetModelosPiaInput,
    ) -> Result<QueryResult<ModeloRelatorioPia>, CoreError> {
        ensure_permission(&identity, codes::MODELO_PIA_LER)?;

        let request = normalizer::normalize(&input.query, &QUERY_SCHEMA)?;
        let page = fetch_paged(&self.modelo_pia_repository, &request).await?;

        Ok(page)
    }

    async fn get_modelo_pia(
        &self,
        identity: Identity,
        input: GetModeloPiaInput,
    ) -> Result<ModeloRelatorioPia, CoreError> {
        ensure_permission(&identity, codes::MODELO_PIA_LER)?;

        self.modelo_pia_repository
            .get_by_id(input.modelo_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_modelo_pia(
        &self,
        identity: Identity,
        input: DeleteModeloPiaInput,
    ) -> Result<(), CoreError> {
        ensure_permission(&identity, codes::MODELO_PIA_EXCLUIR)?;

        self.modelo_pia_repository
            .get_by_id(input.modelo_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.modelo_pia_repository.delete(input.modelo_id).await
    }
}
