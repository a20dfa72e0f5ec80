use uuid::Uuid;

use crate::domain::query::entities::RawQueryRequest;

#[derive(Debug, Clone)]
pub struct GetGruposPermissaoInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetGrupoPermissaoInput {
    pub grupo_id: Uuid,
}
