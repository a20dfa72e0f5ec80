use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::{entities::QueryRequest, errors::QueryError, ports::EntityStore},
        usuario::{
            entities::Usuario, ports::UsuarioRepository, value_objects::UsuarioCredencial,
        },
    },
    entity::usuarios::{ActiveModel, Column, Entity},
    infrastructure::query::{store_error, translator, translator::ColumnMap},
};

#[derive(Debug, Clone)]
pub struct PostgresUsuarioRepository {
    pub db: DatabaseConnection,
}

impl PostgresUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ColumnMap for Entity {
    fn resolve(path: &str) -> Option<Self::Column> {
        match path {
            "nome" => Some(Column::Nome),
            "email" => Some(Column::Email),
            "cpf_cnh" => Some(Column::CpfCnh),
            "situacao" => Some(Column::Situacao),
            "id_cargo" => Some(Column::IdCargo),
            "criado_em" => Some(Column::CriadoEm),
            "atualizado_em" => Some(Column::AtualizadoEm),
            _ => None,
        }
    }

    fn tie_break_column() -> Self::Column {
        Column::Id
    }
}

fn active_model(usuario: &Usuario, senha_hash: String) -> ActiveModel {
    ActiveModel {
        id: Set(usuario.id),
        nome: Set(usuario.nome.clone()),
        email: Set(usuario.email.clone()),
        cpf_cnh: Set(usuario.cpf_cnh.clone()),
        senha_hash: Set(senha_hash),
        foto: Set(usuario.foto.clone()),
        id_cargo: Set(usuario.id_cargo),
        situacao: Set(usuario.situacao.clone()),
        criado_em: Set(usuario.criado_em.fixed_offset()),
        atualizado_em: Set(usuario.atualizado_em.fixed_offset()),
        excluido_em: Set(usuario.excluido_em.map(|dt| dt.fixed_offset())),
        criado_por: Set(usuario.criado_por),
        atualizado_por: Set(usuario.atualizado_por),
        excluido_por: Set(usuario.excluido_por),
    }
}

impl EntityStore<Usuario> for PostgresUsuarioRepository {
    async fn fetch(&self, request: &QueryRequest) -> Result<Vec<Usuario>, QueryError> {
        let rows = translator::paged::<Entity>(request)?
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(Usuario::from).collect())
    }

    async fn count(&self, request: &QueryRequest) -> Result<u64, QueryError> {
        translator::filtered::<Entity>(request)?
            .count(&self.db)
            .await
            .map_err(store_error)
    }
}

impl UsuarioRepository for PostgresUsuarioRepository {
    async fn create(&self, usuario: Usuario, senha_hash: String) -> Result<Usuario, CoreError> {
        let created = Entity::insert(active_model(&usuario, senha_hash))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create usuario: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Usuario::from(created))
    }

    async fn get_by_id(&self, usuario_id: Uuid) -> Result<Option<Usuario>, CoreError> {
        let usuario = Entity::find_by_id(usuario_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get usuario: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(usuario.map(Usuario::from))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Usuario>, CoreError> {
        let usuario = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get usuario by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(usuario.map(Usuario::from))
    }

    async fn get_by_cpf_cnh(&self, cpf_cnh: &str) -> Result<Option<Usuario>, CoreError> {
        let usuario = Entity::find()
            .filter(Column::CpfCnh.eq(cpf_cnh))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get usuario by CPF/CNH: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(usuario.map(Usuario::from))
    }

    async fn get_credencial_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UsuarioCredencial>, CoreError> {
        let model = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get credencial by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(|model| UsuarioCredencial {
            usuario: Usuario::from(&model),
            senha_hash: model.senha_hash,
        }))
    }

    async fn update(&self, usuario: Usuario) -> Result<Usuario, CoreError> {
        // The stored hash is not part of the domain entity; leave it untouched.
        let mut model = active_model(&usuario, String::new());
        model.senha_hash = sea_orm::ActiveValue::NotSet;

        let updated = Entity::update(model).exec(&self.db).await.map_err(|e| {
            error!("Failed to update usuario: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Usuario::from(updated))
    }
}
