use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    query::schema::{EntitySchema, FieldSpec},
};

/// Job position of a staff member. Permissions come from the linked group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cargo {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub id_grupo_permissao: Uuid,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl Cargo {
    pub fn new(nome: String, descricao: Option<String>, id_grupo_permissao: Uuid) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            nome,
            descricao,
            id_grupo_permissao,
            criado_em: now,
            atualizado_em: now,
        }
    }
}

pub const QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "cargo",
    &[
        ("nome", FieldSpec::text()),
        ("id_grupo_permissao", FieldSpec::uuid()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);
