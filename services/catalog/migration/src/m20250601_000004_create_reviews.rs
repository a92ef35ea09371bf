use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await?;

        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::ProductId)
                    .name("idx_reviews_product_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .name("idx_reviews_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Reviews::ProductId).uuid().not_null())
        .col(ColumnDef::new(Reviews::UserId).uuid().not_null())
        .col(ColumnDef::new(Reviews::Title).string().null())
        .col(ColumnDef::new(Reviews::Body).text().not_null())
        .col(
            ColumnDef::new(Reviews::Rating)
                .integer()
                .not_null()
                .check(
                    Expr::col(Reviews::Rating)
                        .gte(1)
                        .and(Expr::col(Reviews::Rating).lte(5)),
                ),
        )
        .col(
            ColumnDef::new(Reviews::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Reviews::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    ProductId,
    UserId,
    Title,
    Body,
    Rating,
    CreatedAt,
    UpdatedAt,
}
