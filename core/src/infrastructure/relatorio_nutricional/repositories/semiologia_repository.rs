use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
        relatorio_nutricional::{
            entities::SemiologiaNutricional, ports::SemiologiaNutricionalRepository,
        },
    },
    entity::semiologias_nutricionais::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresSemiologiaNutricionalRepository {
    pub db: DatabaseConnection,
}

impl PostgresSemiologiaNutricionalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "id_idoso" => Some(Column::IdIdoso),
            "apetite" => Some(Column::Apetite),
            "mastigacao" => Some(Column::Mastigacao),
            "degluticao" => Some(Column::Degluticao),
            "funcionamento_intestinal" => Some(Column::FuncionamentoIntestinal),
            "criado_em" => Some(Column::CriadoEm),
            "atualizado_em" => Some(Column::AtualizadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

fn active_model(semiologia: &SemiologiaNutricional) -> ActiveModel {
    ActiveModel {
        id: Set(semiologia.id),
        id_idoso: Set(semiologia.id_idoso),
        apetite: Set(semiologia.apetite.clone()),
        mastigacao: Set(semiologia.mastigacao.clone()),
        degluticao: Set(semiologia.degluticao.clone()),
        funcionamento_intestinal: Set(semiologia.funcionamento_intestinal.clone()),
        observacoes: Set(semiologia.observacoes.clone()),
        criado_em: Set(semiologia.criado_em.fixed_offset()),
        atualizado_em: Set(semiologia.atualizado_em.fixed_offset()),
        criado_por: Set(semiologia.criado_por),
        atualizado_por: Set(semiologia.atualizado_por),
    }
}

impl EntityStore<SemiologiaNutricional> for PostgresSemiologiaNutricionalRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<SemiologiaNutricional>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(SemiologiaNutricional::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl SemiologiaNutricionalRepository for PostgresSemiologiaNutricionalRepository {
    async fn create(
        &self,
        semiologia: SemiologiaNutricional,
    ) -> Result<SemiologiaNutricional, CoreError> {
        let created = Entity::insert(active_model(&semiologia))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create semiologia nutricional: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(SemiologiaNutricional::from(created))
    }

    async fn get_by_id(
        &self,
        semiologia_id: Uuid,
    ) -> Result<Option<SemiologiaNutricional>, CoreError> {
        let semiologia = Entity::find_by_id(semiologia_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get semiologia nutricional: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(semiologia.map(SemiologiaNutricional::from))
    }

    async fn update(
        &self,
        semiologia: SemiologiaNutricional,
    ) -> Result<SemiologiaNutricional, CoreError> {
        let updated = Entity::update(active_model(&semiologia))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update semiologia nutricional: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(SemiologiaNutricional::from(updated))
    }

    async fn delete(&self, semiologia_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(semiologia_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete semiologia nutricional: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
