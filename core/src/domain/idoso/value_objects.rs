use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::query::entities::RawQueryRequest;

#[derive(Debug, Clone)]
pub struct CreateIdosoInput {
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub sexo: String,
    pub quarto: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetIdososInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetIdosoInput {
    pub idoso_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateIdosoInput {
    pub idoso_id: Uuid,
    pub nome: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub quarto: Option<Option<String>>,
    pub observacoes: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct DeleteIdosoInput {
    pub idoso_id: Uuid,
}
