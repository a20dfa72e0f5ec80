use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::{entities::QueryResult, ports::EntityStore},
    relatorio_nutricional::{
        entities::{RegistroAntropometrico, SemiologiaNutricional},
        value_objects::{
            CreateRegistroAntropometricoInput, CreateSemiologiaInput,
            DeleteRegistroAntropometricoInput, DeleteSemiologiaInput,
            GetRegistroAntropometricoInput, GetRegistrosAntropometricosInput, GetSemiologiaInput,
            GetSemiologiasInput, UpdateRegistroAntropometricoInput, UpdateSemiologiaInput,
        },
    },
};

pub trait RelatorioNutricionalService: Send + Sync {
    fn create_semiologia(
        &self,
        identity: Identity,
        input: CreateSemiologiaInput,
    ) -> impl Future<Output = Result<SemiologiaNutricional, CoreError>> + Send;

    fn get_semiologias(
        &self,
        identity: Identity,
        input: GetSemiologiasInput,
    ) -> impl Future<Output = Result<QueryResult<SemiologiaNutricional>, CoreError>> + Send;

    fn get_semiologia(
        &self,
        identity: Identity,
        input: GetSemiologiaInput,
    ) -> impl Future<Output = Result<SemiologiaNutricional, CoreError>> + Send;

    fn update_semiologia(
        &self,
        identity: Identity,
        input: UpdateSemiologiaInput,
    ) -> impl Future<Output = Result<SemiologiaNutricional, CoreError>> + Send;

    fn delete_semiologia(
        &self,
        identity: Identity,
        input: DeleteSemiologiaInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_registro_antropometrico(
        &self,
        identity: Identity,
        input: CreateRegistroAntropometricoInput,
    ) -> impl Future<Output = Result<RegistroAntropometrico, CoreError>> + Send;

    fn get_registros_antropometricos(
        &self,
        identity: Identity,
        input: GetRegistrosAntropometricosInput,
    ) -> impl Future<Output = Result<QueryResult<RegistroAntropometrico>, CoreError>> + Send;

    fn get_registro_antropometrico(
        &self,
        identity: Identity,
        input: GetRegistroAntropometricoInput,
    ) -> impl Future<Output = Result<RegistroAntropometrico, CoreError>> + Send;

    fn update_registro_antropometrico(
        &self,
        identity: Identity,
        input: UpdateRegistroAntropometricoInput,
    ) -> impl Future<Output = Result<RegistroAntropometrico, CoreError>> + Send;

    fn delete_registro_antropometrico(
        &self,
        identity: Identity,
        input: DeleteRegistroAntropometricoInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SemiologiaNutricionalRepository:
    EntityStore<SemiologiaNutricional> + Send + Sync
{
    fn create(
        &self,
        semiologia: SemiologiaNutricional,
    ) -> impl Future<Output = Result<SemiologiaNutricional, CoreError>> + Send;

    fn get_by_id(
        &self,
        semiologia_id: Uuid,
    ) -> impl Future<Output = Result<Option<SemiologiaNutricional>, CoreError>> + Send;

    fn update(
        &self,
        semiologia: SemiologiaNutricional,
    ) -> impl Future<Output = Result<SemiologiaNutricional, CoreError>> + Send;

    fn delete(&self, semiologia_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait RegistroAntropometricoRepository:
    EntityStore<RegistroAntropometrico> + Send + Sync
{
    fn create(
        &self,
        registro: RegistroAntropometrico,
    ) -> impl Future<Output = Result<RegistroAntropometrico, CoreError>> + Send;

    fn get_by_id(
        &self,
        registro_id: Uuid,
    ) -> impl Future<Output = Result<Option<RegistroAntropometrico>, CoreError>> + Send;

    fn update(
        &self,
        registro: RegistroAntropometrico,
    ) -> impl Future<Output = Result<RegistroAntropometrico, CoreError>> + Send;

    fn delete(&self, registro_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
