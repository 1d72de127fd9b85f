//! Create `agendamento` table with required FKs to `cliente` and `veiculo`.
//!
//! RESTRICT on both FKs: a cliente or veiculo with open agendamentos cannot
//! be deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agendamento::Table)
                    .if_not_exists()
                    .col(pk_auto(Agendamento::Id))
                    .col(string_len(Agendamento::Motivo, 255).not_null())
                    .col(string_len_null(Agendamento::Descricao, 500))
                    .col(integer(Agendamento::VeiculoId).not_null())
                    .col(integer(Agendamento::ClienteId).not_null())
                    .col(timestamp_with_time_zone(Agendamento::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Agendamento::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agendamento_veiculo")
                            .from(Agendamento::Table, Agendamento::VeiculoId)
                            .to(Veiculo::Table, Veiculo::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agendamento_cliente")
                            .from(Agendamento::Table, Agendamento::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Agendamento::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Agendamento { Table, Id, Motivo, Descricao, VeiculoId, ClienteId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Veiculo { Table, Id }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
