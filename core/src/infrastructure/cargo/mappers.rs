use chrono::Utc;

use crate::domain::cargo::entities::Cargo;
use crate::entity::cargos::Model as CargoModel;

impl From<CargoModel> for Cargo {
    fn from(model: CargoModel) -> Self {
        Cargo::from(&model)
    }
}

impl From<&CargoModel> for Cargo {
    fn from(model: &CargoModel) -> Self {
        Cargo {
            id: model.id,
            nome: model.nome.clone(),
            descricao: model.descricao.clone(),
            id_grupo_permissao: model.id_grupo_permissao,
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
        }
    }
}
