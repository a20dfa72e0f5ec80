use crate::domain::{
    authentication::value_objects::Identity,
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, policies::ensure_permission, services::Service},
    grupo_permissao::{entities::codes, ports::GrupoPermissaoRepository},
    health::ports::HealthCheckRepository,
    idoso::{
        entities::{Idoso, QUERY_SCHEMA},
        ports::{IdosoRepository, IdosoService},
        value_objects::{
            CreateIdosoInput, DeleteIdosoInput, GetIdosoInput, GetIdososInput, UpdateIdosoInput,
        },
    },
    modelo_pia::ports::ModeloPiaRepository,
    query::{entities::QueryResult, normalizer, services::fetch_paged},
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

impl<U, CA, G, I, M, SN, RA, H, OS> IdosoService for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn create_idoso(
        &self,
        identity: Identity,
        input: CreateIdosoInput,
    ) -> Result<Idoso, CoreError> {
        ensure_permission(&identity, codes::IDOSO_CRIAR)?;

        if self.idoso_repository.get_by_cpf(&input.cpf).await?.is_some() {
            return Err(CoreError::Conflict("CPF já cadastrado".to_string()));
        }

        let idoso = Idoso::new(
            input.nome,
            input.cpf,
            input.data_nascimento,
            input.sexo,
            input.quarto,
            input.observacoes,
            identity.usuario.id,
        );

        self.idoso_repository.create(idoso).await
    }

    async fn get_idosos(
        &self,
        identity: Identity,
        input: GetIdososInput,
    ) -> Result<QueryResult<Idoso>, CoreError> {
        ensure_permission(&identity, codes::IDOSO_LER)?;

        let request = normalizer::normalize(&input.query, &QUERY_SCHEMA)?;
        let page = fetch_paged(&self.idoso_repository, &request).await?;

        Ok(page)
    }

    async fn get_idoso(&self, identity: Identity, input: GetIdosoInput) -> Result<Idoso, CoreError> {
        ensure_permission(&identity, codes::IDOSO_LER)?;

        self.idoso_repository
            .get_by_id(input.idoso_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_idoso(
        &self,
        identity: Identity,
        input: UpdateIdosoInput,
    ) -> Result<Idoso, CoreError> {
        ensure_permission(&identity, codes::IDOSO_ATUALIZAR)?;

        let mut idoso = self
            .idoso_repository
            .get_by_id(input.idoso_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        idoso.update(
            input.nome,
            input.data_nascimento,
            input.sexo,
            input.quarto,
            input.observacoes,
            identity.usuario.id,
        );

        self.idoso_repository.update(idoso).await
    }

    async fn delete_idoso(
        &self,
        identity: Identity,
        input: DeleteIdosoInput,
    ) -> Result<(), CoreError> {
        ensure_permission(&identity, codes::IDOSO_EXCLUIR)?;

        let mut idoso = self
            .idoso_repository
            .get_by_id(input.idoso_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        idoso.soft_delete(identity.usuario.id);
        self.idoso_repository.update(idoso).await?;

        Ok(())
    }
}
