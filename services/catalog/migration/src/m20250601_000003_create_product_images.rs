use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on product_id: deleting a product leaves its images behind.
        manager.create_table(table()).await?;

        // Not unique: positions are assigned by convention, see the attach use case.
        manager
            .create_index(
                Index::create()
                    .table(ProductImages::Table)
                    .col(ProductImages::ProductId)
                    .col((ProductImages::Position, IndexOrder::Desc))
                    .name("idx_product_images_product_id_position")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductImages::Table).to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(ProductImages::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(ProductImages::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(ProductImages::ProductId).uuid().not_null())
        .col(ColumnDef::new(ProductImages::Url).text().not_null())
        .col(ColumnDef::new(ProductImages::Alt).string().null())
        .col(
            ColumnDef::new(ProductImages::Position)
                .integer()
                .not_null(),
        )
        .to_owned()
}

#[derive(Iden)]
enum ProductImages {
    Table,
    Id,
    ProductId,
    Url,
    Alt,
    Position,
}
