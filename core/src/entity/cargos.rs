use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cargos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub id_grupo_permissao: Uuid,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grupos_permissao::Entity",
        from = "Column::IdGrupoPermissao",
        to = "super::grupos_permissao::Column::Id"
    )]
    GrupoPermissao,
}

impl Related<super::grupos_permissao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrupoPermissao.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
