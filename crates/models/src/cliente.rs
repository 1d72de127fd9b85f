use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cpf: String,
    pub nome: String,
    pub telefone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Veiculo,
    Agendamento,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Veiculo => Entity::has_many(super::veiculo::Entity).into(),
            Relation::Agendamento => Entity::has_many(super::agendamento::Entity).into(),
        }
    }
}

impl Related<super::veiculo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Veiculo.def() }
}

impl Related<super::agendamento::Entity> for Entity {
    fn to() -> RelationDef { Relation::Agendamento.def() }
}

impl ActiveModelBehavior for ActiveModel {}
