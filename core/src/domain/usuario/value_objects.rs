use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{query::entities::RawQueryRequest, usuario::entities::Usuario};

#[derive(Debug, Clone)]
pub struct CreateUsuarioInput {
    pub nome: String,
    pub email: String,
    pub cpf_cnh: String,
    pub senha: String,
    pub id_cargo: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetUsuariosInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetUsuarioInput {
    pub usuario_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateUsuarioInput {
    pub usuario_id: Uuid,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub cpf_cnh: Option<String>,
    pub id_cargo: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct DeleteUsuarioInput {
    pub usuario_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UploadFotoInput {
    pub usuario_id: Uuid,
    pub content_type: String,
    pub payload: Bytes,
}

/// Login lookup result: the user plus its stored password hash.
#[derive(Debug, Clone)]
pub struct UsuarioCredencial {
    pub usuario: Usuario,
    pub senha_hash: String,
}
