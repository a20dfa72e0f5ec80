use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
        relatorio_nutricional::{
            entities::RegistroAntropometrico, ports::RegistroAntropometricoRepository,
        },
    },
    entity::registros_antropometricos::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresRegistroAntropometricoRepository {
    pub db: DatabaseConnection,
}

impl PostgresRegistroAntropometricoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "id_idoso" => Some(Column::IdIdoso),
            "peso_kg" => Some(Column::PesoKg),
            "altura_cm" => Some(Column::AlturaCm),
            "imc" => Some(Column::Imc),
            "data_registro" => Some(Column::DataRegistro),
            "criado_em" => Some(Column::CriadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

fn active_model(registro: &RegistroAntropometrico) -> ActiveModel {
    ActiveModel {
        id: Set(registro.id),
        id_idoso: Set(registro.id_idoso),
        peso_kg: Set(registro.peso_kg),
        altura_cm: Set(registro.altura_cm),
        imc: Set(registro.imc),
        circunferencia_braco_cm: Set(registro.circunferencia_braco_cm),
        circunferencia_panturrilha_cm: Set(registro.circunferencia_panturrilha_cm),
        data_registro: Set(registro.data_registro),
        criado_em: Set(registro.criado_em.fixed_offset()),
        atualizado_em: Set(registro.atualizado_em.fixed_offset()),
        criado_por: Set(registro.criado_por),
        atualizado_por: Set(registro.atualizado_por),
    }
}

impl EntityStore<RegistroAntropometrico> for PostgresRegistroAntropometricoRepository {
    async fn fetch(
        &self,
        request: &QueryRequest,
    ) -> Result<Vec<RegistroAntropometrico>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(RegistroAntropometrico::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl RegistroAntropometricoRepository for PostgresRegistroAntropometricoRepository {
    async fn create(
        &self,
        registro: RegistroAntropometrico,
    ) -> Result<RegistroAntropometrico, CoreError> {
        let created = Entity::insert(active_model(&registro))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create registro antropométrico: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(RegistroAntropometrico::from(created))
    }

    async fn get_by_id(
        &self,
        registro_id: Uuid,
    ) -> Result<Option<RegistroAntropometrico>, CoreError> {
        let registro = Entity::find_by_id(registro_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get registro antropométrico: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(registro.map(RegistroAntropometrico::from))
    }

    async fn update(
        &self,
        registro: RegistroAntropometrico,
    ) -> Result<RegistroAntropometrico, CoreError> {
        let updated = Entity::update(active_model(&registro))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update registro antropométrico: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(RegistroAntropometrico::from(updated))
    }

    async fn delete(&self, registro_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(registro_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete registro antropométrico: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
