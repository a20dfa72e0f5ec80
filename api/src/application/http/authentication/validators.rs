use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "e-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "senha é obrigatória"))]
    pub senha: String,
}
