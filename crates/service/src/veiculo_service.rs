use chrono::{Datelike, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use crate::errors::ServiceError;
use models::cliente;
use models::veiculo::{self, Entity as VeiculoEntity};

/// The upper bound follows the calendar, so it cannot live in a static
/// validation schema.
pub fn validate_ano(ano: i32) -> Result<(), ServiceError> {
    let max = Utc::now().year() + 1;
    if !(1900..=max).contains(&ano) {
        return Err(ServiceError::Validation(format!(
            "ano deve estar entre 1900 e {}",
            max
        )));
    }
    Ok(())
}

/// Resolve a cliente id or fail with `NotFound("cliente")`.
async fn ensure_cliente(db: &DatabaseConnection, id: i32) -> Result<cliente::Model, ServiceError> {
    cliente::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("cliente"))
}

/// Create a veiculo. An owner reference, when supplied, must resolve; placa
/// and chassi uniqueness are enforced by storage.
pub async fn create_veiculo(
    db: &DatabaseConnection,
    placa: &str,
    chassi: &str,
    modelo: &str,
    ano: Option<i32>,
    cliente_id: Option<i32>,
) -> Result<veiculo::Model, ServiceError> {
    if let Some(a) = ano {
        validate_ano(a)?;
    }
    if let Some(cid) = cliente_id {
        ensure_cliente(db, cid).await?;
    }
    let am = veiculo::ActiveModel {
        placa: Set(placa.to_string()),
        chassi: Set(chassi.to_string()),
        modelo: Set(modelo.to_string()),
        ano: Set(ano),
        cliente_id: Set(cliente_id),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    info!(id = created.id, placa = %created.placa, "veiculo created");
    Ok(created)
}

/// List veiculos with their optional owner.
pub async fn list_veiculos(
    db: &DatabaseConnection,
) -> Result<Vec<(veiculo::Model, Option<cliente::Model>)>, ServiceError> {
    let rows = VeiculoEntity::find()
        .find_also_related(cliente::Entity)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a veiculo by id with its optional owner.
pub async fn get_veiculo(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(veiculo::Model, Option<cliente::Model>)>, ServiceError> {
    let found = VeiculoEntity::find_by_id(id)
        .find_also_related(cliente::Entity)
        .one(db)
        .await?;
    Ok(found)
}

/// List the veiculos owned by a cliente. The cliente must exist; an empty
/// list is a valid result.
pub async fn veiculos_do_cliente(
    db: &DatabaseConnection,
    cliente_id: i32,
) -> Result<Vec<veiculo::Model>, ServiceError> {
    let dono = ensure_cliente(db, cliente_id).await?;
    let rows = VeiculoEntity::find()
        .filter(veiculo::Column::ClienteId.eq(dono.id))
        .all(db)
        .await?;
    Ok(rows)
}

/// Apply only the supplied fields. A new owner reference must resolve.
pub async fn update_veiculo(
    db: &DatabaseConnection,
    id: i32,
    placa: Option<&str>,
    chassi: Option<&str>,
    modelo: Option<&str>,
    ano: Option<i32>,
    cliente_id: Option<i32>,
) -> Result<veiculo::Model, ServiceError> {
    let current = VeiculoEntity::find_by_id(id).one(db).await?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("veiculo"));
    };
    if let Some(a) = ano {
        validate_ano(a)?;
    }
    if let Some(cid) = cliente_id {
        ensure_cliente(db, cid).await?;
    }
    let mut am: veiculo::ActiveModel = existing.into();
    if let Some(p) = placa {
        am.placa = Set(p.to_string());
    }
    if let Some(c) = chassi {
        am.chassi = Set(c.to_string());
    }
    if let Some(m) = modelo {
        am.modelo = Set(m.to_string());
    }
    if let Some(a) = ano {
        am.ano = Set(Some(a));
    }
    if let Some(cid) = cliente_id {
        am.cliente_id = Set(Some(cid));
    }
    let updated = am.update(db).await?;
    info!(id, "veiculo updated");
    Ok(updated)
}

/// Delete a veiculo; RESTRICT rejects it while agendamentos reference it.
pub async fn delete_veiculo(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = VeiculoEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("veiculo"));
    }
    info!(id, "veiculo deleted");
    Ok(())
}
