use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateModeloPiaValidator {
    #[validate(length(min = 2, message = "nome deve ter ao menos 2 caracteres"))]
    pub nome: String,

    /// Section/field layout of the report template.
    #[serde(default)]
    pub estrutura: serde_json::Value,
}
