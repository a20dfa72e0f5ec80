use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    cargo::{
        entities::Cargo,
        value_objects::{CreateCargoInput, GetCargoInput, GetCargosInput},
    },
    common::entities::app_errors::CoreError,
    query::{entities::QueryResult, ports::EntityStore},
};

pub trait CargoService: Send + Sync {
    fn create_cargo(
        &self,
        identity: Identity,
        input: CreateCargoInput,
    ) -> impl Future<Output = Result<Cargo, CoreError>> + Send;

    fn get_cargos(
        &self,
        identity: Identity,
        input: GetCargosInput,
    ) -> impl Future<Output = Result<QueryResult<Cargo>, CoreError>> + Send;

    fn get_cargo(
        &self,
        identity: Identity,
        input: GetCargoInput,
    ) -> impl Future<Output = Result<Cargo, CoreError>> + Send;
}

pub trait CargoRepository: EntityStore<Cargo> + Send + Sync {
    fn create(&self, cargo: Cargo) -> impl Future<Output = Result<Cargo, CoreError>> + Send;

    fn get_by_id(
        &self,
        cargo_id: Uuid,
    ) -> impl Future<Output = Result<Option<Cargo>, CoreError>> + Send;
}
