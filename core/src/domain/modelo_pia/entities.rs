use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    query::schema::{EntitySchema, FieldSpec},
};

/// Template for PIA (Plano Individual de Atendimento) reports. The
/// `estrutura` document describes the sections and fields of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModeloRelatorioPia {
    pub id: Uuid,
    pub nome: String,
    pub estrutura: serde_json::Value,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub criado_por: Uuid,
}

impl ModeloRelatorioPia {
    pub fn new(nome: String, estrutura: serde_json::Value, criado_por: Uuid) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            nome,
            estrutura,
            criado_em: now,
            atualizado_em: now,
            criado_por,
        }
    }
}

pub const QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "modelo_relatorio_pia",
    &[
        ("nome", FieldSpec::text()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);
