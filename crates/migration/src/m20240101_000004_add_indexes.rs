use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Veiculo: index on cliente_id for the by-owner listing
        manager
            .create_index(
                Index::create()
                    .name("idx_veiculo_cliente")
                    .table(Veiculo::Table)
                    .col(Veiculo::ClienteId)
                    .to_owned(),
            )
            .await?;

        // Agendamento: indexes on both FKs for the filtered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_agendamento_veiculo")
                    .table(Agendamento::Table)
                    .col(Agendamento::VeiculoId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_agendamento_cliente")
                    .table(Agendamento::Table)
                    .col(Agendamento::ClienteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_veiculo_cliente").table(Veiculo::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_agendamento_veiculo").table(Agendamento::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_agendamento_cliente").table(Agendamento::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Veiculo { Table, ClienteId }

#[derive(DeriveIden)]
enum Agendamento { Table, VeiculoId, ClienteId }
