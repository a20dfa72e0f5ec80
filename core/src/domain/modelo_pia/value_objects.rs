use uuid::Uuid;

use crate::domain::query::entities::RawQueryRequest;

#[derive(Debug, Clone)]
pub struct CreateModeloPiaInput {
    pub nome: String,
    pub estrutura: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct GetModelosPiaInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetModeloPiaInput {
    pub modelo_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteModeloPiaInput {
    pub modelo_id: Uuid,
}
