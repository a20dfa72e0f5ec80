use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::SITUACAO_ATIVO, entities::SITUACAO_INATIVO, generate_uuid_v7},
    query::schema::{EntitySchema, FieldSpec},
};

/// Resident record. Never removed from the store; discharge is a status
/// mutation through the update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Idoso {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub sexo: String,
    pub quarto: Option<String>,
    pub situacao: String,
    pub observacoes: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub excluido_em: Option<DateTime<Utc>>,
    pub criado_por: Uuid,
    pub atualizado_por: Uuid,
    pub excluido_por: Option<Uuid>,
}

impl Idoso {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nome: String,
        cpf: String,
        data_nascimento: NaiveDate,
        sexo: String,
        quarto: Option<String>,
        observacoes: Option<String>,
        criado_por: Uuid,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            nome,
            cpf,
            data_nascimento,
            sexo,
            quarto,
            situacao: SITUACAO_ATIVO.to_string(),
            observacoes,
            criado_em: now,
            atualizado_em: now,
            excluido_em: None,
            criado_por,
            atualizado_por: criado_por,
            excluido_por: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        nome: Option<String>,
        data_nascimento: Option<NaiveDate>,
        sexo: Option<String>,
        quarto: Option<Option<String>>,
        observacoes: Option<Option<String>>,
        atualizado_por: Uuid,
    ) {
        if let Some(nome) = nome {
            self.nome = nome;
        }
        if let Some(data_nascimento) = data_nascimento {
            self.data_nascimento = data_nascimento;
        }
        if let Some(sexo) = sexo {
            self.sexo = sexo;
        }
        if let Some(quarto) = quarto {
            self.quarto = quarto;
        }
        if let Some(observacoes) = observacoes {
            self.observacoes = observacoes;
        }
        self.atualizado_por = atualizado_por;
        self.atualizado_em = Utc::now();
    }

    /// Delete reuses the update path: the row stays, the status flips.
    pub fn soft_delete(&mut self, excluido_por: Uuid) {
        let now = Utc::now();
        self.situacao = SITUACAO_INATIVO.to_string();
        self.excluido_em = Some(now);
        self.excluido_por = Some(excluido_por);
        self.atualizado_em = now;
        self.atualizado_por = excluido_por;
    }

    pub fn is_ativo(&self) -> bool {
        self.situacao == SITUACAO_ATIVO
    }
}

pub const QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "idoso",
    &[
        ("nome", FieldSpec::text()),
        ("cpf", FieldSpec::text()),
        ("data_nascimento", FieldSpec::date()),
        ("sexo", FieldSpec::text()),
        ("quarto", FieldSpec::text()),
        ("situacao", FieldSpec::text()),
        ("observacoes", FieldSpec::text().not_sortable()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);
