use crate::domain::{
    authentication::{services::hash_senha, value_objects::Identity},
    cargo::ports::CargoRepository,
    common::{
        entities::app_errors::CoreError, generate_random_string, policies::ensure_permission,
        services::Service,
    },
    grupo_permissao::{entities::codes, ports::GrupoPermissaoRepository},
    health::ports::HealthCheckRepository,
    idoso::ports::IdosoRepository,
    modelo_pia::ports::ModeloPiaRepository,
    query::{entities::QueryResult, normalizer, services::fetch_paged},
    relatorio_nutricional::ports::{
        RegistroAntropometricoRepository, SemiologiaNutricionalRepository,
    },
    storage::ports::ObjectStoragePort,
    usuario::{
        entities::{QUERY_SCHEMA, Usuario},
        ports::{UsuarioRepository, UsuarioService},
        value_objects::{
            CreateUsuarioInput, DeleteUsuarioInput, GetUsuarioInput, GetUsuariosInput,
            UpdateUsuarioInput, UploadFotoInput,
        },
    },
};

impl<U, CA, G, I, M, SN, RA, H, OS> UsuarioService for Service<U, CA, G, I, M, SN, RA, H, OS>
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
    async fn create_usuario(
        &self,
        identity: Identity,
        input: CreateUsuarioInput,
    ) -> Result<Usuario, CoreError> {
        ensure_permission(&identity, codes::USUARIO_CRIAR)?;

        if self
            .usuario_repository
            .get_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "e-mail {} já cadastrado",
                input.email
            )));
        }
        if self
            .usuario_repository
            .get_by_cpf_cnh(&input.cpf_cnh)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("CPF/CNH já cadastrado".to_string()));
        }
        self.cargo_repository
            .get_by_id(input.id_cargo)
            .await?
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("cargo {} não existe", input.id_cargo))
            })?;

        let senha_hash = hash_senha(&input.senha)?;
        let usuario = Usuario::new(
            input.nome,
            input.email,
            input.cpf_cnh,
            input.id_cargo,
            Some(identity.usuario.id),
        );

        self.usuario_repository.create(usuario, senha_hash).await
    }

    async fn get_usuarios(
        &self,
        identity: Identity,
        input: GetUsuariosInput,
    ) -> Result<QueryResult<Usuario>, CoreError> {
        ensure_permission(&identity, codes::USUARIO_LER)?;

        let request = normalizer::normalize(&input.query, &QUERY_SCHEMA)?;
        let page = fetch_paged(&self.usuario_repository, &request).await?;

        Ok(page)
    }

    async fn get_usuario(
        &self,
        identity: Identity,
        input: GetUsuarioInput,
    ) -> Result<Usuario, CoreError> {
        ensure_permission(&identity, codes::USUARIO_LER)?;

        self.usuario_repository
            .get_by_id(input.usuario_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_usuario(
        &self,
        identity: Identity,
        input: UpdateUsuarioInput,
    ) -> Result<Usuario, CoreError> {
        ensure_permission(&identity, codes::USUARIO_ATUALIZAR)?;

        let mut usuario = self
            .usuario_repository
            .get_by_id(input.usuario_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(email) = input.email.as_deref() {
            if let Some(existing) = self.usuario_repository.get_by_email(email).await? {
                if existing.id != usuario.id {
                    return Err(CoreError::Conflict(format!("e-mail {email} já cadastrado")));
                }
            }
        }
        if let Some(id_cargo) = input.id_cargo {
            self.cargo_repository
                .get_by_id(id_cargo)
                .await?
                .ok_or_else(|| {
                    CoreError::InvalidInput(format!("cargo {id_cargo} não existe"))
                })?;
        }

        usuario.update(
            input.nome,
            input.email,
            input.cpf_cnh,
            input.id_cargo,
            identity.usuario.id,
        );

        self.usuario_repository.update(usuario).await
    }

    async fn delete_usuario(
        &self,
        identity: Identity,
        input: DeleteUsuarioInput,
    ) -> Result<(), CoreError> {
        ensure_permission(&identity, codes::USUARIO_EXCLUIR)?;

        let mut usuario = self
            .usuario_repository
            .get_by_id(input.usuario_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        usuario.soft_delete(identity.usuario.id);
        self.usuario_repository.update(usuario).await?;

        Ok(())
    }

    async fn upload_foto(
        &self,
        identity: Identity,
        input: UploadFotoInput,
    ) -> Result<Usuario, CoreError> {
        ensure_permission(&identity, codes::USUARIO_ATUALIZAR)?;

        if !input.content_type.starts_with("image/") {
            return Err(CoreError::InvalidInput(format!(
                "foto deve ser uma imagem, recebido `{}`",
                input.content_type
            )));
        }

        let mut usuario = self
            .usuario_repository
            .get_by_id(input.usuario_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let object_key = format!(
            "usuarios/{}/foto-{}",
            usuario.id,
            generate_random_string(8)
        );
        self.object_storage
            .put_object(&object_key, input.payload, &input.content_type)
            .await?;

        let url = self.object_storage.public_url(&object_key);
        usuario.set_foto(url, identity.usuario.id);

        self.usuario_repository.update(usuario).await
    }
}
