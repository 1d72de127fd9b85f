//! Create `veiculo` table with optional FK to `cliente`.
//!
//! Deleting the owning cliente orphans the veiculo (SET NULL); a veiculo
//! without an owner is a valid row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Veiculo::Table)
                    .if_not_exists()
                    .col(pk_auto(Veiculo::Id))
                    .col(string_len(Veiculo::Placa, 7).unique_key().not_null())
                    .col(string_len(Veiculo::Chassi, 17).unique_key().not_null())
                    .col(string_len(Veiculo::Modelo, 100).not_null())
                    .col(integer_null(Veiculo::Ano))
                    .col(integer_null(Veiculo::ClienteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veiculo_cliente")
                            .from(Veiculo::Table, Veiculo::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Veiculo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Veiculo { Table, Id, Placa, Chassi, Modelo, Ano, ClienteId }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
