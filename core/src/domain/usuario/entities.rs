use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::SITUACAO_ATIVO, entities::SITUACAO_INATIVO, generate_uuid_v7},
    query::schema::{EntitySchema, FieldSpec},
};

/// Staff user of the facility. The password hash lives outside this struct
/// so it can never leak through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub cpf_cnh: String,
    pub foto: Option<String>,
    pub id_cargo: Uuid,
    pub situacao: String,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub excluido_em: Option<DateTime<Utc>>,
    pub criado_por: Option<Uuid>,
    pub atualizado_por: Option<Uuid>,
    pub excluido_por: Option<Uuid>,
}

impl Usuario {
    pub fn new(
        nome: String,
        email: String,
        cpf_cnh: String,
        id_cargo: Uuid,
        criado_por: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            nome,
            email,
            cpf_cnh,
            foto: None,
            id_cargo,
            situacao: SITUACAO_ATIVO.to_string(),
            criado_em: now,
            atualizado_em: now,
            excluido_em: None,
            criado_por,
            atualizado_por: criado_por,
            excluido_por: None,
        }
    }

    pub fn update(
        &mut self,
        nome: Option<String>,
        email: Option<String>,
        cpf_cnh: Option<String>,
        id_cargo: Option<Uuid>,
        atualizado_por: Uuid,
    ) {
        if let Some(nome) = nome {
            self.nome = nome;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(cpf_cnh) = cpf_cnh {
            self.cpf_cnh = cpf_cnh;
        }
        if let Some(id_cargo) = id_cargo {
            self.id_cargo = id_cargo;
        }
        self.atualizado_por = Some(atualizado_por);
        self.atualizado_em = Utc::now();
    }

    pub fn set_foto(&mut self, url: String, atualizado_por: Uuid) {
        self.foto = Some(url);
        self.atualizado_por = Some(atualizado_por);
        self.atualizado_em = Utc::now();
    }

    /// Delete reuses the update path: the row stays, the status flips.
    pub fn soft_delete(&mut self, excluido_por: Uuid) {
        let now = Utc::now();
        self.situacao = SITUACAO_INATIVO.to_string();
        self.excluido_em = Some(now);
        self.excluido_por = Some(excluido_por);
        self.atualizado_em = now;
        self.atualizado_por = Some(excluido_por);
    }

    pub fn is_ativo(&self) -> bool {
        self.situacao == SITUACAO_ATIVO
    }

    #[cfg(test)]
    pub fn fixture() -> Self {
        Self::new(
            "Ana Silva".to_string(),
            "ana.silva@recanto.org.br".to_string(),
            "39053344705".to_string(),
            generate_uuid_v7(),
            None,
        )
    }
}

pub const QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "usuario",
    &[
        ("nome", FieldSpec::text()),
        ("email", FieldSpec::text()),
        ("cpf_cnh", FieldSpec::text()),
        ("situacao", FieldSpec::text()),
        ("id_cargo", FieldSpec::uuid()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_usuario_starts_ativo() {
        let usuario = Usuario::fixture();
        assert!(usuario.is_ativo());
        assert!(usuario.excluido_em.is_none());
    }

    #[test]
    fn soft_delete_flips_situacao_and_keeps_audit_trail() {
        let mut usuario = Usuario::fixture();
        let admin = generate_uuid_v7();

        usuario.soft_delete(admin);

        assert!(!usuario.is_ativo());
        assert_eq!(usuario.excluido_por, Some(admin));
        assert!(usuario.excluido_em.is_some());
    }
}
