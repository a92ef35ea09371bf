pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_products;
mod m20250601_000003_create_product_images;
mod m20250601_000004_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_products::Migration),
            Box::new(m20250601_000003_create_product_images::Migration),
            Box::new(m20250601_000004_create_reviews::Migration),
        ]
    }
}
