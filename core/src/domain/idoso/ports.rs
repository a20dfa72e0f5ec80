use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    idoso::{
        entities::Idoso,
        value_objects::{
            CreateIdosoInput, DeleteIdosoInput, GetIdosoInput, GetIdososInput, UpdateIdosoInput,
        },
    },
    query::{entities::QueryResult, ports::EntityStore},
};

pub trait IdosoService: Send + Sync {
    fn create_idoso(
        &self,
        identity: Identity,
        input: CreateIdosoInput,
    ) -> impl Future<Output = Result<Idoso, CoreError>> + Send;

    fn get_idosos(
        &self,
        identity: Identity,
        input: GetIdososInput,
    ) -> impl Future<Output = Result<QueryResult<Idoso>, CoreError>> + Send;

    fn get_idoso(
        &self,
        identity: Identity,
        input: GetIdosoInput,
    ) -> impl Future<Output = Result<Idoso, CoreError>> + Send;

    fn update_idoso(
        &self,
        identity: Identity,
        input: UpdateIdosoInput,
    ) -> impl Future<Output = Result<Idoso, CoreError>> + Send;

    fn delete_idoso(
        &self,
        identity: Identity,
        input: DeleteIdosoInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait IdosoRepository: EntityStore<Idoso> + Send + Sync {
    fn create(&self, idoso: Idoso) -> impl Future<Output = Result<Idoso, CoreError>> + Send;

    fn get_by_id(
        &self,
        idoso_id: Uuid,
    ) -> impl Future<Output = Result<Option<Idoso>, CoreError>> + Send;

    fn get_by_cpf(
        &self,
        cpf: &str,
    ) -> impl Future<Output = Result<Option<Idoso>, CoreError>> + Send;

    fn update(&self, idoso: Idoso) -> impl Future<Output = Result<Idoso, CoreError>> + Send;
}
