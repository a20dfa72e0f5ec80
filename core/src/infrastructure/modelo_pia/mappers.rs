use chrono::Utc;

use crate::domain::modelo_pia::entities::ModeloRelatorioPia;
use crate::entity::modelos_relatorio_pia::Model as ModeloModel;

impl From<ModeloModel> for ModeloRelatorioPia {
    fn from(model: ModeloModel) -> Self {
        ModeloRelatorioPia {
            id: model.id,
            nome: model.nome,
            estrutura: model.estrutura,
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
            criado_por: model.criado_por,
        }
    }
}

impl From<&ModeloModel> for ModeloRelatorioPia {
    fn from(model: &ModeloModel) -> Self {
        ModeloRelatorioPia::from(model.clone())
    }
}
