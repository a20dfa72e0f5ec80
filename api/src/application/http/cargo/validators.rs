use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCargoValidator {
    #[validate(length(min = 2, message = "nome deve ter ao menos 2 caracteres"))]
    pub nome: String,

    #[serde(default)]
    pub descricao: Option<String>,

    pub id_grupo_permissao: Uuid,
}
