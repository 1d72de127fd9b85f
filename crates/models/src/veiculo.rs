use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A veiculo may exist without an owner; `cliente_id` is a weak reference.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "veiculo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub placa: String,
    pub chassi: String,
    pub modelo: String,
    pub ano: Option<i32>,
    pub cliente_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cliente,
    Agendamento,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cliente => Entity::belongs_to(super::cliente::Entity)
                .from(Column::ClienteId)
                .to(super::cliente::Column::Id)
                .into(),
            Relation::Agendamento => Entity::has_many(super::agendamento::Entity).into(),
        }
    }
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl Related<super::agendamento::Entity> for Entity {
    fn to() -> RelationDef { Relation::Agendamento.def() }
}

impl ActiveModelBehavior for ActiveModel {}
