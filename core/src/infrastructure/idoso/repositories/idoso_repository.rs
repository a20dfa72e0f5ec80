use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        idoso::{entities::Idoso, ports::IdosoRepository},
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
    },
    entity::idosos::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresIdosoRepository {
    pub db: DatabaseConnection,
}

impl PostgresIdosoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "nome" => Some(Column::Nome),
            "cpf" => Some(Column::Cpf),
            "data_nascimento" => Some(Column::DataNascimento),
            "sexo" => Some(Column::Sexo),
            "quarto" => Some(Column::Quarto),
            "situacao" => Some(Column::Situacao),
            "observacoes" => Some(Column::Observacoes),
            "criado_em" => Some(Column::CriadoEm),
            "atualizado_em" => Some(Column::AtualizadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

fn active_model(idoso: &Idoso) -> ActiveModel {
    ActiveModel {
        id: Set(idoso.id),
        nome: Set(idoso.nome.clone()),
        cpf: Set(idoso.cpf.clone()),
        data_nascimento: Set(idoso.data_nascimento),
        sexo: Set(idoso.sexo.clone()),
        quarto: Set(idoso.quarto.clone()),
        situacao: Set(idoso.situacao.clone()),
        observacoes: Set(idoso.observacoes.clone()),
        criado_em: Set(idoso.criado_em.fixed_offset()),
        atualizado_em: Set(idoso.atualizado_em.fixed_offset()),
        excluido_em: Set(idoso.excluido_em.map(|dt| dt.fixed_offset())),
        criado_por: Set(idoso.criado_por),
        atualizado_por: Set(idoso.atualizado_por),
        excluido_por: Set(idoso.excluido_por),
    }
}

impl EntityStore<Idoso> for PostgresIdosoRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<Idoso>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(Idoso::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl IdosoRepository for PostgresIdosoRepository {
    async fn create(&self, idoso: Idoso) -> Result<Idoso, CoreError> {
        let created = Entity::insert(active_model(&idoso))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create idoso: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Idoso::from(created))
    }

    async fn get_by_id(&self, idoso_id: Uuid) -> Result<Option<Idoso>, CoreError> {
        let idoso = Entity::find_by_id(idoso_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get idoso: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(idoso.map(Idoso::from))
    }

    async fn get_by_cpf(&self, cpf: &str) -> Result<Option<Idoso>, CoreError> {
        let idoso = Entity::find()
            .filter(Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get idoso by CPF: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(idoso.map(Idoso::from))
    }

    async fn update(&self, idoso: Idoso) -> Result<Idoso, CoreError> {
        let updated = Entity::update(active_model(&idoso))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update idoso: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Idoso::from(updated))
    }
}
