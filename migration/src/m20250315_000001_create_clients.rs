use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clients::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Clients::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Clients::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Clients::Role).string().not_null().default("client"))
                    // Soft reference to projects.id - no foreign key on purpose,
                    // the two sides of the link are maintained independently.
                    .col(ColumnDef::new(Clients::ProjectId).string().null())
                    .col(ColumnDef::new(Clients::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_username")
                    .table(Clients::Table)
                    .col(Clients::Username)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    ProjectId,
    CreatedAt,
}
