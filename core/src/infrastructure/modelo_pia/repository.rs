use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        modelo_pia::{entities::ModeloRelatorioPia, ports::ModeloPiaRepository},
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
    },
    entity::modelos_relatorio_pia::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresModeloPiaRepository {
    pub db: DatabaseConnection,
}

impl PostgresModeloPiaRepository {
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

impl EntityStore<ModeloRelatorioPia> for PostgresModeloPiaRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<ModeloRelatorioPia>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(ModeloRelatorioPia::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl ModeloPiaRepository for PostgresModeloPiaRepository {
    async fn create(&self, modelo: ModeloRelatorioPia) -> Result<ModeloRelatorioPia, CoreError> {
        let active_model = ActiveModel {
            id: Set(modelo.id),
            nome: Set(modelo.nome.clone()),
            estrutura: Set(modelo.estrutura.clone()),
            criado_em: Set(modelo.criado_em.fixed_offset()),
            atualizado_em: Set(modelo.atualizado_em.fixed_offset()),
            criado_por: Set(modelo.criado_por),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create modelo de relatório PIA: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ModeloRelatorioPia::from(created))
    }

    async fn get_by_id(&self, modelo_id: Uuid) -> Result<Option<ModeloRelatorioPia>, CoreError> {
        let modelo = Entity::find_by_id(modelo_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get modelo de relatório PIA: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(modelo.map(ModeloRelatorioPia::from))
    }

    async fn delete(&self, modelo_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(modelo_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete modelo de relatório PIA: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
