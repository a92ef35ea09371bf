use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Products::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Products::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        // Nullable, but unique when present.
        .col(ColumnDef::new(Products::Sku).string().null().unique_key())
        .col(ColumnDef::new(Products::Name).string().not_null())
        .col(ColumnDef::new(Products::Description).text().null())
        .col(
            ColumnDef::new(Products::Price)
                .decimal_len(12, 2)
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Products::Stock)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Products::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Products::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    Sku,
    Name,
    Description,
    Price,
    Stock,
    CreatedAt,
    UpdatedAt,
}
