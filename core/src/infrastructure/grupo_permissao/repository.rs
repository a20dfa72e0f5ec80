use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        grupo_permissao::{entities::GrupoPermissao, ports::GrupoPermissaoRepository},
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
    },
    entity::grupos_permissao::{Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresGrupoPermissaoRepository {
    pub db: DatabaseConnection,
}

impl PostgresGrupoPermissaoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "nome" => Some(Column::Nome),
            "criado_em" => Some(Column::CriadoEm),
            "atualizado_em" => Some(Column::AtualizadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

impl EntityStore<GrupoPermissao> for PostgresGrupoPermissaoRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<GrupoPermissao>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(GrupoPermissao::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl GrupoPermissaoRepository for PostgresGrupoPermissaoRepository {
    async fn get_by_id(&self, grupo_id: Uuid) -> Result<Option<GrupoPermissao>, CoreError> {
        let grupo = Entity::find_by_id(grupo_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get grupo de permissão: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(grupo.map(GrupoPermissao::from))
    }
}
