use chrono::Utc;

use crate::domain::grupo_permissao::entities::GrupoPermissao;
use crate::entity::grupos_permissao::Model as GrupoPermissaoModel;

impl From<GrupoPermissaoModel> for GrupoPermissao {
    fn from(model: GrupoPermissaoModel) -> Self {
        GrupoPermissao::from(&model)
    }
}

impl From<&GrupoPermissaoModel> for GrupoPermissao {
    fn from(model: &GrupoPermissaoModel) -> Self {
        GrupoPermissao {
            id: model.id,
            nome: model.nome.clone(),
            permissoes: map_permissoes(&model.permissoes),
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
        }
    }
}

/// Permission codes are stored as a JSON string array. Anything else in the
/// column yields an empty set rather than a panic.
fn map_permissoes(json: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(json.clone()).unwrap_or_default()
}
