use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "idosos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub data_nascimento: Date,
    pub sexo: String,
    pub quarto: Option<String>,
    pub situacao: String,
    pub observacoes: Option<String>,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
    pub excluido_em: Option<DateTimeWithTimeZone>,
    pub criado_por: Uuid,
    pub atualizado_por: Uuid,
    pub excluido_por: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
