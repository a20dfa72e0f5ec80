use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub cpf_cnh: String,
    pub senha_hash: String,
    pub foto: Option<String>,
    pub id_cargo: Uuid,
    pub situacao: String,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
    pub excluido_em: Option<DateTimeWithTimeZone>,
    pub criado_por: Option<Uuid>,
    pub atualizado_por: Option<Uuid>,
    pub excluido_por: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cargos::Entity",
        from = "Column::IdCargo",
        to = "super::cargos::Column::Id"
    )]
    Cargo,
}

impl Related<super::cargos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cargo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
