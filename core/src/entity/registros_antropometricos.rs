use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registros_antropometricos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub id_idoso: Uuid,
    #[sea_orm(column_type = "Double")]
    pub peso_kg: f64,
    #[sea_orm(column_type = "Double")]
    pub altura_cm: f64,
    #[sea_orm(column_type = "Double")]
    pub imc: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub circunferencia_braco_cm: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub circunferencia_panturrilha_cm: Option<f64>,
    pub data_registro: Date,
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
