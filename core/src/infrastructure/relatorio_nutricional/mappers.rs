use chrono::Utc;

use crate::domain::relatorio_nutricional::entities::{
    RegistroAntropometrico, SemiologiaNutricional,
};
use crate::entity::{
    registros_antropometricos::Model as RegistroModel,
    semiologias_nutricionais::Model as SemiologiaModel,
};

impl From<SemiologiaModel> for SemiologiaNutricional {
    fn from(model: SemiologiaModel) -> Self {
        SemiologiaNutricional::from(&model)
    }
}

impl From<&SemiologiaModel> for SemiologiaNutricional {
    fn from(model: &SemiologiaModel) -> Self {
        SemiologiaNutricional {
            id: model.id,
            id_idoso: model.id_idoso,
            apetite: model.apetite.clone(),
            mastigacao: model.mastigacao.clone(),
            degluticao: model.degluticao.clone(),
            funcionamento_intestinal: model.funcionamento_intestinal.clone(),
            observacoes: model.observacoes.clone(),
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
            criado_por: model.criado_por,
            atualizado_por: model.atualizado_por,
        }
    }
}

impl From<RegistroModel> for RegistroAntropometrico {
    fn from(model: RegistroModel) -> Self {
        RegistroAntropometrico::from(&model)
    }
}

impl From<&RegistroModel> for RegistroAntropometrico {
    fn from(model: &RegistroModel) -> Self {
        RegistroAntropometrico {
            id: model.id,
            id_idoso: model.id_idoso,
            peso_kg: model.peso_kg,
            altura_cm: model.altura_cm,
            imc: model.imc,
            circunferencia_braco_cm: model.circunferencia_braco_cm,
            circunferencia_panturrilha_cm: model.circunferencia_panturrilha_cm,
            data_registro: model.data_registro,
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
            criado_por: model.criado_por,
            atualizado_por: model.atualizado_por,
        }
    }
}
