use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "semiologias_nutricionais")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub id_idoso: Uuid,
    pub apetite: String,
    pub mastigacao: String,
    pub degluticao: String,
    pub funcionamento_intestinal: String,
    pub observacoes: Option<String>,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
    pub criado_por: Uuid,
    pub atualizado_por: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::idosos::Entity",
        from = "Column::IdIdoso",
        to = "super::idosos::Column::Id"
    )]
    Idoso,
}

impl Related<super::idosos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Idoso.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
