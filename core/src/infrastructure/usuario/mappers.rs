use chrono::Utc;

use crate::domain::usuario::entities::Usuario;
use crate::entity::usuarios::Model as UsuarioModel;

impl From<UsuarioModel> for Usuario {
    fn from(model: UsuarioModel) -> Self {
        Usuario::from(&model)
    }
}

impl From<&UsuarioModel> for Usuario {
    fn from(model: &UsuarioModel) -> Self {
        Usuario {
            id: model.id,
            nome: model.nome.clone(),
            email: model.email.clone(),
            cpf_cnh: model.cpf_cnh.clone(),
            foto: model.foto.clone(),
            id_cargo: model.id_cargo,
            situacao: model.situacao.clone(),
            criado_em: model.criado_em.with_timezone(&Utc),
            atualizado_em: model.atualizado_em.with_timezone(&Utc),
            excluido_em: model.excluido_em.map(|dt| dt.with_timezone(&Utc)),
            criado_por: model.criado_por,
            atualizado_por: model.atualizado_por,
            excluido_por: model.excluido_por,
        }
    }
}
