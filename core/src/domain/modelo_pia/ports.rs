use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    modelo_pia::{
        entities::ModeloRelatorioPia,
        value_objects::{
            CreateModeloPiaInput, DeleteModeloPiaInput, GetModeloPiaInput, GetModelosPiaInput,
        },
    },
    query::{entities::QueryResult, ports::EntityStore},
};

pub trait ModeloPiaService: Send + Sync {
    fn create_modelo_pia(
        &self,
        identity: Identity,
        input: CreateModeloPiaInput,
    ) -> impl Future<Output = Result<ModeloRelatorioPia, CoreError>> + Send;

    fn get_modelos_pia(
        &self,
        identity: Identity,
        input: GetModelosPiaInput,
    ) -> impl Future<Output = Result<QueryResult<ModeloRelatorioPia>, CoreError>> + Send;

    fn get_modelo_pia(
        &self,
        identity: Identity,
        input: GetModeloPiaInput,
    ) -> impl Future<Output = Result<ModeloRelatorioPia, CoreError>> + Send;

    fn delete_modelo_pia(
        &self,
        identity: Identity,
        input: DeleteModeloPiaInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ModeloPiaRepository: EntityStore<ModeloRelatorioPia> + Send + Sync {
    fn create(
        &self,
        modelo: ModeloRelatorioPia,
    ) -> impl Future<Output = Result<ModeloRelatorioPia, CoreError>> + Send;

    fn get_by_id(
        &self,
        modelo_id: Uuid,
    ) -> impl Future<Output = Result<Option<ModeloRelatorioPia>, CoreError>> + Send;

    fn delete(&self, modelo_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
