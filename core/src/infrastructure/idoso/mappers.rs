use chrono::Utc;

use crate::domain::idoso::entities::Idoso;
use crate::entity::idosos::Model as IdosoModel;

impl From<IdosoModel> for Idoso {
    fn from(model: IdosoModel) -> Self {
        Idoso::from(&model)
    }
}

impl From<&IdosoModel> for Idoso {
    fn from(model: &IdosoModel) -> Self {
        Idoso {
            id: model.id,
            nome: model.nome.clone(),
            cpf: model.cpf.clone(),
            data_nascimento: model.data_nascimento,
            sexo: model.sexo.clone(),
            quarto: model.quarto.clone(),
            situacao: model.situacao.clone(),
            observacoes: model.observacoes.clone(),
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
            excluido_em: model.excluido_em.map(|dt| dt.with_timezone(&Utc)),
            criado_por: model.criado_por,
            atualizado_por: model.atualizado_por,
            excluido_por: model.excluido_por,
        }
    }
}
