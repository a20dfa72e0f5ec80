use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// CPF and CNH are both 11-digit identifiers.
static RE_CPF_CNH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{11}$").expect("regex estática"));

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioValidator {
    #[validate(length(min = 3, message = "nome deve ter ao menos 3 caracteres"))]
    pub nome: String,

    #[validate(email(message = "e-mail inválido"))]
    pub email: String,

    #[validate(regex(path = *RE_CPF_CNH, message = "CPF/CNH deve ter 11 dígitos"))]
    pub cpf_cnh: String,

    #[validate(length(min = 8, message = "senha deve ter ao menos 8 caracteres"))]
    pub senha: String,

    pub id_cargo: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuarioValidator {
    #[serde(default)]
    #[validate(length(min = 3, message = "nome deve ter ao menos 3 caracteres"))]
    pub nome: Option<String>,

    #[serde(default)]
    #[validate(email(message = "e-mail inválido"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(regex(path = *RE_CPF_CNH, message = "CPF/CNH deve ter 11 dígitos"))]
    pub cpf_cnh: Option<String>,

    #[serde(default)]
    pub id_cargo: Option<Uuid>,
}
