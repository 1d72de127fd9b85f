use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, Set,
};
use tracing::info;

use crate::errors::ServiceError;
use models::agendamento::{self, Entity as AgendamentoEntity};
use models::{cliente, veiculo};

/// An agendamento joined with summaries of its cliente and veiculo.
pub type AgendamentoDetalhado = (
    agendamento::Model,
    Option<cliente::Model>,
    Option<veiculo::Model>,
);

/// Create an agendamento after the referential cross-check: both references
/// must resolve and the veiculo must be owned by the given cliente.
/// One read of cliente, one read of veiculo, one write.
pub async fn create_agendamento(
    db: &DatabaseConnection,
    motivo: &str,
    descricao: Option<&str>,
    veiculo_id: i32,
    cliente_id: i32,
) -> Result<agendamento::Model, ServiceError> {
    let dono = cliente::Entity::find_by_id(cliente_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("cliente"))?;

    let v = veiculo::Entity::find_by_id(veiculo_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("veiculo"))?;

    if v.cliente_id != Some(dono.id) {
        return Err(ServiceError::OwnershipMismatch);
    }

    let now = Utc::now().into();
    let am = agendamento::ActiveModel {
        motivo: Set(motivo.to_string()),
        descricao: Set(descricao.map(str::to_string)),
        veiculo_id: Set(v.id),
        cliente_id: Set(dono.id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    info!(id = created.id, cliente_id, veiculo_id, "agendamento created");
    Ok(created)
}

/// Attach cliente and veiculo summaries to a batch of agendamentos.
async fn detalhar(
    db: &DatabaseConnection,
    rows: Vec<agendamento::Model>,
) -> Result<Vec<AgendamentoDetalhado>, ServiceError> {
    let clientes = rows.load_one(cliente::Entity, db).await?;
    let veiculos = rows.load_one(veiculo::Entity, db).await?;
    Ok(rows
        .into_iter()
        .zip(clientes)
        .zip(veiculos)
        .map(|((a, c), v)| (a, c, v))
        .collect())
}

pub async fn list_agendamentos(
    db: &DatabaseConnection,
) -> Result<Vec<AgendamentoDetalhado>, ServiceError> {
    let rows = AgendamentoEntity::find().all(db).await?;
    detalhar(db, rows).await
}

/// Agendamentos of one veiculo; the veiculo must exist.
pub async fn agendamentos_do_veiculo(
    db: &DatabaseConnection,
    veiculo_id: i32,
) -> Result<Vec<AgendamentoDetalhado>, ServiceError> {
    let v = veiculo::Entity::find_by_id(veiculo_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("veiculo"))?;
    let rows = AgendamentoEntity::find()
        .filter(agendamento::Column::VeiculoId.eq(v.id))
        .all(db)
        .await?;
    detalhar(db, rows).await
}

/// Agendamentos of one cliente; the cliente must exist.
pub async fn agendamentos_do_cliente(
    db: &DatabaseConnection,
    cliente_id: i32,
) -> Result<Vec<AgendamentoDetalhado>, ServiceError> {
    let c = cliente::Entity::find_by_id(cliente_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("cliente"))?;
    let rows = AgendamentoEntity::find()
        .filter(agendamento::Column::ClienteId.eq(c.id))
        .all(db)
        .await?;
    detalhar(db, rows).await
}

/// Apply only the supplied fields. The cliente/veiculo references are
/// immutable after creation.
pub async fn update_agendamento(
    db: &DatabaseConnection,
    id: i32,
    motivo: Option<&str>,
    descricao: Option<&str>,
) -> Result<agendamento::Model, ServiceError> {
    let current = AgendamentoEntity::find_by_id(id).one(db).await?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("agendamento"));
    };
    let mut am: agendamento::ActiveModel = existing.into();
    if let Some(m) = motivo {
        am.motivo = Set(m.to_string());
    }
    if let Some(d) = descricao {
        am.descricao = Set(Some(d.to_string()));
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    info!(id, "agendamento updated");
    Ok(updated)
}

pub async fn delete_agendamento(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = AgendamentoEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("agendamento"));
    }
    info!(id, "agendamento deleted");
    Ok(())
}
