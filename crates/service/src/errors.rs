use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} não encontrado")]
    NotFound(String),
    #[error("campo único já existe: {0}")]
    Duplicate(String),
    #[error("este veículo não pertence ao cliente informado")]
    OwnershipMismatch,
    #[error("registro ainda referenciado: {0}")]
    Referenced(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(entity.to_string())
    }
}

/// Columns carrying a unique constraint, used to name the offending field
/// when Postgres reports a violation through its constraint name.
const UNIQUE_COLUMNS: &[&str] = &["cpf", "placa", "chassi"];

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                let field = UNIQUE_COLUMNS
                    .iter()
                    .find(|c| detail.contains(*c))
                    .copied()
                    .unwrap_or("desconhecido");
                ServiceError::Duplicate(field.to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                ServiceError::Referenced(detail)
            }
            _ => ServiceError::Db(e.to_string()),
        }
    }
}
