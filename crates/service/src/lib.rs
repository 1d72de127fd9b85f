//! Service layer providing business-oriented CRUD operations on top of models.
//! - Guards the referential invariants the database schema alone cannot
//!   express (a veiculo used in an agendamento must belong to the cliente).
//! - Translates storage conflicts into the tagged `ServiceError` taxonomy.

pub mod errors;
pub mod cliente_service;
pub mod veiculo_service;
pub mod agendamento_service;

#[cfg(test)]
pub mod test_support;
