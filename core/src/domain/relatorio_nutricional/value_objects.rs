use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::query::entities::RawQueryRequest;

#[derive(Debug, Clone)]
pub struct CreateSemiologiaInput {
    pub id_idoso: Uuid,
    pub apetite: String,
    pub mastigacao: String,
    pub degluticao: String,
    pub funcionamento_intestinal: String,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetSemiologiasInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetSemiologiaInput {
    pub semiologia_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateSemiologiaInput {
    pub semiologia_id: Uuid,
    pub apetite: Option<String>,
    pub mastigacao: Option<String>,
    pub degluticao: Option<String>,
    pub funcionamento_intestinal: Option<String>,
    pub observacoes: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct DeleteSemiologiaInput {
    pub semiologia_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateRegistroAntropometricoInput {
    pub id_idoso: Uuid,
    pub peso_kg: f64,
    pub altura_cm: f64,
    pub circunferencia_braco_cm: Option<f64>,
    pub circunferencia_panturrilha_cm: Option<f64>,
    pub data_registro: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct GetRegistrosAntropometricosInput {
    pub query: RawQueryRequest,
}

#[derive(Debug, Clone)]
pub struct GetRegistroAntropometricoInput {
    pub registro_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateRegistroAntropometricoInput {
    pub registro_id: Uuid,
    pub peso_kg: Option<f64>,
    pub altura_cm: Option<f64>,
    pub circunferencia_braco_cm: Option<Option<f64>>,
    pub circunferencia_panturrilha_cm: Option<Option<f64>>,
    pub data_registro: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct DeleteRegistroAntropometricoInput {
    pub registro_id: Uuid,
}
