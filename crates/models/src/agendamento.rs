use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invariant enforced at the service layer: the referenced veiculo must be
/// owned by the referenced cliente.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agendamento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub motivo: String,
    pub descricao: Option<String>,
    pub veiculo_id: i32,
    pub cliente_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cliente,
    Veiculo,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cliente => Entity::belongs_to(super::cliente::Entity)
                .from(Column::ClienteId)
                .to(super::cliente::Column::Id)
                .into(),
            Relation::Veiculo => Entity::belongs_to(super::veiculo::Entity)
                .from(Column::VeiculoId)
                .to(super::veiculo::Column::Id)
                .into(),
        }
    }
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl Related<super::veiculo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Veiculo.def() }
}

impl ActiveModelBehavior for ActiveModel {}
