use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::{entities::QueryResult, ports::EntityStore},
    usuario::{
        entities::Usuario,
        value_objects::{
            CreateUsuarioInput, DeleteUsuarioInput, GetUsuarioInput, GetUsuariosInput,
            UpdateUsuarioInput, UploadFotoInput, UsuarioCredencial,
        },
    },
};

pub trait UsuarioService: Send + Sync {
    fn create_usuario(
        &self,
        identity: Identity,
        input: CreateUsuarioInput,
    ) -> impl Future<Output = Result<Usuario, CoreError>> + Send;

    fn get_usuarios(
        &self,
        identity: Identity,
        input: GetUsuariosInput,
    ) -> impl Future<Output = Result<QueryResult<Usuario>, CoreError>> + Send;

    fn get_usuario(
        &self,
        identity: Identity,
        input: GetUsuarioInput,
    ) -> impl Future<Output = Result<Usuario, CoreError>> + Send;

    fn update_usuario(
        &self,
        identity: Identity,
        input: UpdateUsuarioInput,
    ) -> impl Future<Output = Result<Usuario, CoreError>> + Send;

    fn delete_usuario(
        &self,
        identity: Identity,
        input: DeleteUsuarioInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn upload_foto(
        &self,
        identity: Identity,
        input: UploadFotoInput,
    ) -> impl Future<Output = Result<Usuario, CoreError>> + Send;
}

pub trait UsuarioRepository: EntityStore<Usuario> + Send + Sync {
    fn create(
        &self,
        usuario: Usuario,
        senha_hash: String,
    ) -> impl Future<Output = Result<Usuario, CoreError>> + Send;

    fn get_by_id(
        &self,
        usuario_id: Uuid,
    ) -> impl Future<Output = Result<Option<Usuario>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CoreError>> + Send;

    fn get_by_cpf_cnh(
        &self,
        cpf_cnh: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CoreError>> + Send;

    fn get_credencial_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<UsuarioCredencial>, CoreError>> + Send;

    fn update(&self, usuario: Usuario) -> impl Future<Output = Result<Usuario, CoreError>> + Send;
}
