use crate::domain::{
    authentication::value_objects::Identity,
    cargo::ports::CargoRepository,
    common::{entities::app_errors::CoreError, policies::ensure_permission, services::Service},
    grupo_permissao::{entities::codes, ports::GrupoPermissaoRepository},
    health::ports::HealthCheckRepository,
    idoso::ports::IdosoRepository,
    modelo_pia::ports::ModeloPiaRepository,
    query::{entities::QueryResult, normalizer, services::fetch_paged},
    relatorio_nutricional::{
        entities::{
            REGISTRO_QUERY_SCHEMA, RegistroAntropometrico, SEMIOLOGIA_QUERY_SCHEMA,
            SemiologiaNutricional,
        },
        ports::{
            RegistroAntropometricoRepository, RelatorioNutricionalService,
            SemiologiaNutricionalRepository,
        },
        value_objects::{
            CreateRegistroAntropometricoInput, CreateSemiologiaInput,
            DeleteRegistroAntropometricoInput, DeleteSemiologiaInput,
            GetRegistroAntropometricoInput, GetRegistrosAntropometricosInput, GetSemiologiaInput,
            GetSemiologiasInput, UpdateRegistroAntropometricoInput, UpdateSemiologiaInput,
        },
    },
    storage::ports::ObjectStoragePort,
    usuario::ports::UsuarioRepository,
};

impl<U, CA, G, I, M, SN, RA, H, OS> RelatorioNutricionalService
    for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn create_semiologia(
        &self,
        identity: Identity,
        input: CreateSemiologiaInput,
    ) -> Result<SemiologiaNutricional, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_CRIAR)?;

        self.idoso_repository
            .get_by_id(input.id_idoso)
            .await?
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("idoso {} não existe", input.id_idoso))
            })?;

        let semiologia = SemiologiaNutricional::new(
            input.id_idoso,
            input.apetite,
            input.mastigacao,
            input.degluticao,
            input.funcionamento_intestinal,
            input.observacoes,
            identity.usuario.id,
        );

        self.semiologia_repository.create(semiologia).await
    }

    async fn get_semiologias(
        &self,
        identity: Identity,
        input: GetSemiologiasInput,
    ) -> Result<QueryResult<SemiologiaNutricional>, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_LER)?;

        let request = normalizer::normalize(&input.query, &SEMIOLOGIA_QUERY_SCHEMA)?;
        let page = fetch_paged(&self.semiologia_repository, &request).await?;

        Ok(page)
    }

    async fn get_semiologia(
        &self,
        identity: Identity,
        input: GetSemiologiaInput,
    ) -> Result<SemiologiaNutricional, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_LER)?;

        self.semiologia_repository
            .get_by_id(input.semiologia_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_semiologia(
        &self,
        identity: Identity,
        input: UpdateSemiologiaInput,
    ) -> Result<SemiologiaNutricional, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_ATUALIZAR)?;

        let mut semiologia = self
            .semiologia_repository
            .get_by_id(input.semiologia_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        semiologia.update(
            input.apetite,
            input.mastigacao,
            input.degluticao,
            input.funcionamento_intestinal,
            input.observacoes,
            identity.usuario.id,
        );

        self.semiologia_repository.update(semiologia).await
    }

    async fn delete_semiologia(
        &self,
        identity: Identity,
        input: DeleteSemiologiaInput,
    ) -> Result<(), CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_EXCLUIR)?;

        self.semiologia_repository
            .get_by_id(input.semiologia_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.semiologia_repository.delete(input.semiologia_id).await
    }

    async fn create_registro_antropometrico(
        &self,
        identity: Identity,
        input: CreateRegistroAntropometricoInput,
    ) -> Result<RegistroAntropometrico, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_CRIAR)?;

        if input.peso_kg <= 0.0 || input.altura_cm <= 0.0 {
            return Err(CoreError::InvalidInput(
                "peso e altura devem ser positivos".to_string(),
            ));
        }
        self.idoso_repository
            .get_by_id(input.id_idoso)
            .await?
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("idoso {} não existe", input.id_idoso))
            })?;

        let registro = RegistroAntropometrico::new(
            input.id_idoso,
            input.peso_kg,
            input.altura_cm,
            input.circunferencia_braco_cm,
            input.circunferencia_panturrilha_cm,
            input.data_registro,
            identity.usuario.id,
        );

        self.registro_repository.create(registro).await
    }

    async fn get_registros_antropometricos(
        &self,
        identity: Identity,
        input: GetRegistrosAntropometricosInput,
    ) -> Result<QueryResult<RegistroAntropometrico>, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_LER)?;

        let request = normalizer::normalize(&input.query, &REGISTRO_QUERY_SCHEMA)?;
        let page = fetch_paged(&self.registro_repository, &request).await?;

        Ok(page)
    }

    async fn get_registro_antropometrico(
        &self,
        identity: Identity,
        input: GetRegistroAntropometricoInput,
    ) -> Result<RegistroAntropometrico, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_LER)?;

        self.registro_repository
            .get_by_id(input.registro_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_registro_antropometrico(
        &self,
        identity: Identity,
        input: UpdateRegistroAntropometricoInput,
    ) -> Result<RegistroAntropometrico, CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_ATUALIZAR)?;

        if matches!(input.peso_kg, Some(peso) if peso <= 0.0)
            || matches!(input.altura_cm, Some(altura) if altura <= 0.0)
        {
            return Err(CoreError::InvalidInput(
                "peso e altura devem ser positivos".to_string(),
            ));
        }

        let mut registro = self
            .registro_repository
            .get_by_id(input.registro_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        registro.update(
            input.peso_kg,
            input.altura_cm,
            input.circunferencia_braco_cm,
            input.circunferencia_panturrilha_cm,
            input.data_registro,
            identity.usuario.id,
        );

        self.registro_repository.update(registro).await
    }

    async fn delete_registro_antropometrico(
        &self,
        identity: Identity,
        input: DeleteRegistroAntropometricoInput,
    ) -> Result<(), CoreError> {
        ensure_permission(&identity, codes::RELATORIO_NUTRICIONAL_EXCLUIR)?;

        self.registro_repository
            .get_by_id(input.registro_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.registro_repository.delete(input.registro_id).await
    }
}
