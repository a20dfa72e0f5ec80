use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::idoso::validators::double_option;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistroAntropometricoValidator {
    pub id_idoso: Uuid,

    #[validate(range(min = 1.0, max = 400.0, message = "peso fora do intervalo plausível"))]
    pub peso_kg: f64,

    #[validate(range(min = 30.0, max = 250.0, message = "altura fora do intervalo plausível"))]
    pub altura_cm: f64,

    #[serde(default)]
    pub circunferencia_braco_cm: Option<f64>,

    #[serde(default)]
    pub circunferencia_panturrilha_cm: Option<f64>,

    pub data_registro: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistroAntropometricoValidator {
    #[serde(default)]
    #[validate(range(min = 1.0, max = 400.0, message = "peso fora do intervalo plausível"))]
    pub peso_kg: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 30.0, max = 250.0, message = "altura fora do intervalo plausível"))]
    pub altura_cm: Option<f64>,

    #[serde(default, deserialize_with = "double_option")]
    pub circunferencia_braco_cm: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    pub circunferencia_panturrilha_cm: Option<Option<f64>>,

    #[serde(default)]
    pub data_registro: Option<NaiveDate>,
}
