use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Name).string().not_null())
                    .col(ColumnDef::new(Projects::CurrentStage).string().not_null())
                    .col(ColumnDef::new(Projects::Progress).integer().not_null().default(0))
                    .col(ColumnDef::new(Projects::LastUpdated).big_integer().not_null())
                    // JSON array of image URLs
                    .col(ColumnDef::new(Projects::Images).string().not_null().default("[]"))
                    // Soft reference to clients.id - deleting a client leaves
                    // its projects in place, so this may dangle.
                    .col(ColumnDef::new(Projects::ClientId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_client_id")
                    .table(Projects::Table)
                    .col(Projects::ClientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Name,
    CurrentStage,
    Progress,
    LastUpdated,
    Images,
    ClientId,
}
