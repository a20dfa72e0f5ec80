use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    grupo_permissao::{
        entities::GrupoPermissao,
        value_objects::{GetGrupoPermissaoInput, GetGruposPermissaoInput},
    },
    query::{entities::QueryResult, ports::EntityStore},
};

pub trait GrupoPermissaoService: Send + Sync {
    fn get_grupos_permissao(
        &self,
        identity: Identity,
        input: GetGruposPermissaoInput,
    ) -> impl Future<Output = Result<QueryResult<GrupoPermissao>, CoreError>> + Send;

    fn get_grupo_permissao(
        &self,
        identity: Identity,
        input: GetGrupoPermissaoInput,
    ) -> impl Future<Output = Result<GrupoPermissao, CoreError>> + Send;
}

pub trait GrupoPermissaoRepository: EntityStore<GrupoPermissao> + Send + Sync {
    fn get_by_id(
        &self,
        grupo_id: Uuid,
    ) -> impl Future<Output = Result<Option<GrupoPermissao>, CoreError>> + Send;
}
