use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::query::schema::{EntitySchema, FieldSpec};

/// Permission codes carried by a group. `*` grants everything.
pub mod codes {
    pub const USUARIO_LER: &str = "usuario.ler";
    pub const USUARIO_CRIAR: &str = "usuario.criar";
    pub const USUARIO_ATUALIZAR: &str = "usuario.atualizar";
    pub const USUARIO_EXCLUIR: &str = "usuario.excluir";

    pub const IDOSO_LER: &str = "idoso.ler";
    pub const IDOSO_CRIAR: &str = "idoso.criar";
    pub const IDOSO_ATUALIZAR: &str = "idoso.atualizar";
    pub const IDOSO_EXCLUIR: &str = "idoso.excluir";

    pub const CARGO_LER: &str = "cargo.ler";
    pub const CARGO_CRIAR: &str = "cargo.criar";

    pub const GRUPO_PERMISSAO_LER: &str = "grupo_permissao.ler";

    pub const MODELO_PIA_LER: &str = "modelo_pia.ler";
    pub const MODELO_PIA_CRIAR: &str = "modelo_pia.criar";
    pub const MODELO_PIA_EXCLUIR: &str = "modelo_pia.excluir";

    pub const RELATORIO_NUTRICIONAL_LER: &str = "relatorio_nutricional.ler";
    pub const RELATORIO_NUTRICIONAL_CRIAR: &str = "relatorio_nutricional.criar";
    pub const RELATORIO_NUTRICIONAL_ATUALIZAR: &str = "relatorio_nutricional.atualizar";
    pub const RELATORIO_NUTRICIONAL_EXCLUIR: &str = "relatorio_nutricional.excluir";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GrupoPermissao {
    pub id: Uuid,
    pub nome: String,
    pub permissoes: Vec<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

pub const QUERY_SCHEMA: EntitySchema = EntitySchema::new(
    "grupo_permissao",
    &[
        ("nome", FieldSpec::text()),
        ("criado_em", FieldSpec::date_time()),
        ("atualizado_em", FieldSpec::date_time()),
    ],
    "criado_em",
);
