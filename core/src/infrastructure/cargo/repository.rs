use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        cargo::{entities::Cargo, ports::CargoRepository},
        common::entities::app_errors::CoreError,
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
    },
    entity::cargos::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresCargoRepository {
    pub db: DatabaseConnection,
}

impl PostgresCargoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "nome" => Some(Column::Nome),
            "id_grupo_permissao" => Some(Column::IdGrupoPermissao),
            "criado_em" => Some(Column::CriadoEm),
            "atualizado_em" => Some(Column::AtualizadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

impl EntityStore<Cargo> for PostgresCargoRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<Cargo>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(Cargo::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl CargoRepository for PostgresCargoRepository {
    async fn create(&self, cargo: Cargo) -> Result<Cargo, CoreError> {
        let active_model = ActiveModel {
            id: Set(cargo.id),
            nome: Set(cargo.nome.clone()),
            descricao: Set(cargo.descricao.clone()),
            id_grupo_permissao: Set(cargo.id_grupo_permissao),
            criado_em: Set(cargo.criado_em.fixed_offset()),
            atualizado_em: Set(cargo.atualizado_em.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create cargo: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Cargo::from(created))
    }

    async fn get_by_id(&self, cargo_id: Uuid) -> Result<Option<Cargo>, CoreError> {
        let cargo = Entity::find_by_id(cargo_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get cargo: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(cargo.map(Cargo::from))
    }
}
