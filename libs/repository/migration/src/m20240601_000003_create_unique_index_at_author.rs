use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_author_table::Author;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Author::Table)
                    .name("uq_authors_name")
                    .col(Author::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Author::Table)
                    .name("uq_authors_name")
                    .to_owned(),
            )
            .await
    }
}
