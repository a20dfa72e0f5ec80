use uuid::Uuid;

use crate::domain::query::entities::RawQueryRequest;

#[derive(Debug, Clone)]
pub struct CreateCargoInput {
    pub nome: String,
    pub descricao: Option<String>,
    pub id_grupo_permissao: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetCargosInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetCargoInput {
    pub cargo_id: Uuid,
}
