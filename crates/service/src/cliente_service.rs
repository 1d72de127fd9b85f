use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::info;

use crate::errors::ServiceError;
use models::cliente::{self, Entity as ClienteEntity};
use models::veiculo;

/// Create a cliente. CPF uniqueness is enforced by the storage layer and
/// surfaced as `Duplicate("cpf")`.
pub async fn create_cliente(
    db: &DatabaseConnection,
    cpf: &str,
    nome: &str,
    telefone: &str,
) -> Result<cliente::Model, ServiceError> {
    let am = cliente::ActiveModel {
        cpf: Set(cpf.to_string()),
        nome: Set(nome.to_string()),
        telefone: Set(telefone.to_string()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    info!(id = created.id, "cliente created");
    Ok(created)
}

/// List clientes with their veiculos.
pub async fn list_clientes(
    db: &DatabaseConnection,
) -> Result<Vec<(cliente::Model, Vec<veiculo::Model>)>, ServiceError> {
    let rows = ClienteEntity::find()
        .find_with_related(veiculo::Entity)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a cliente by id with their veiculos.
pub async fn get_cliente(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(cliente::Model, Vec<veiculo::Model>)>, ServiceError> {
    let Some(found) = ClienteEntity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let veiculos = found.find_related(veiculo::Entity).all(db).await?;
    Ok(Some((found, veiculos)))
}

/// Apply only the supplied fields; uniqueness re-checked by storage.
pub async fn update_cliente(
    db: &DatabaseConnection,
    id: i32,
    cpf: Option<&str>,
    nome: Option<&str>,
    telefone: Option<&str>,
) -> Result<cliente::Model, ServiceError> {
    let current = ClienteEntity::find_by_id(id).one(db).await?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("cliente"));
    };
    let mut am: cliente::ActiveModel = existing.into();
    if let Some(c) = cpf {
        am.cpf = Set(c.to_string());
    }
    if let Some(n) = nome {
        am.nome = Set(n.to_string());
    }
    if let Some(t) = telefone {
        am.telefone = Set(t.to_string());
    }
    let updated = am.update(db).await?;
    info!(id, "cliente updated");
    Ok(updated)
}

/// Delete a cliente. A cliente still referenced by agendamentos is rejected
/// by the RESTRICT foreign key and surfaced as `Referenced`.
pub async fn delete_cliente(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = ClienteEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("cliente"));
    }
    info!(id, "cliente deleted");
    Ok(())
}
