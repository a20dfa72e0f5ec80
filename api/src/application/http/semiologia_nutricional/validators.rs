use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::idoso::validators::double_option;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSemiologiaValidator {
    pub id_idoso: Uuid,

    #[validate(length(min = 1, message = "apetite é obrigatório"))]
    pub apetite: String,

    #[validate(length(min = 1, message = "mastigação é obrigatória"))]
    pub mastigacao: String,

    #[validate(length(min = 1, message = "deglutição é obrigatória"))]
    pub degluticao: String,

    #[validate(length(min = 1, message = "funcionamento intestinal é obrigatório"))]
    pub funcionamento_intestinal: String,

    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSemiologiaValidator {
    #[serde(default)]
    pub apetite: Option<String>,

    #[serde(default)]
    pub mastigacao: Option<String>,

    #[serde(default)]
    pub degluticao: Option<String>,

    #[serde(default)]
    pub funcionamento_intestinal: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub observacoes: Option<Option<String>>,
}
