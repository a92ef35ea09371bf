use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, ProductDetail, format_price};
use crate::domain::validation::{Rule, require_fields, require_id};
use crate::error::CatalogServiceError;

/// Field values submitted for creating or updating a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

fn has_sku(input: &ProductInput) -> bool {
    !input.sku.is_empty()
}

fn has_name(input: &ProductInput) -> bool {
    !input.name.is_empty()
}

// A zero price formats to "0.00" and therefore passes.
fn has_price(input: &ProductInput) -> bool {
    !format_price(&input.price).is_empty()
}

/// Required-field checks shared by create and update, in reporting order.
pub const PRODUCT_RULES: &[Rule<ProductInput>] =
    &[("SKU", has_sku), ("Name", has_name), ("Price", has_price)];

const PRODUCT_ID: &str = "product ID";

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> CreateProductUseCase<P> {
    pub async fn execute(&self, input: ProductInput) -> Result<Product, CatalogServiceError> {
        require_fields(&input, PRODUCT_RULES)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::now_v7(),
            sku: Some(input.sku),
            name: input.name,
            description: input.description,
            price: input
                .price
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            stock: input.stock,
            created_at: now,
            updated_at: now,
        };
        self.products.create(&product).await?;

        info!(product_id = %product.id, "product created");
        Ok(product)
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<ProductDetail>, CatalogServiceError> {
        self.products.list_detailed().await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(&self, raw_id: &str) -> Result<ProductDetail, CatalogServiceError> {
        let id = require_id(raw_id, PRODUCT_ID)?;
        self.products
            .find_detailed(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> UpdateProductUseCase<P> {
    /// Validates `input` against the stored product and re-saves it.
    ///
    /// The submitted values are checked but not copied onto the stored row;
    /// only `updated_at` moves. Clients of the existing API rely on this.
    pub async fn execute(
        &self,
        raw_id: &str,
        input: ProductInput,
    ) -> Result<Product, CatalogServiceError> {
        let product = self.load(raw_id).await?;
        self.apply(product, input).await
    }

    /// Parses the id and fetches the stored product.
    pub async fn load(&self, raw_id: &str) -> Result<Product, CatalogServiceError> {
        let id = require_id(raw_id, PRODUCT_ID)?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }

    pub async fn apply(
        &self,
        mut product: Product,
        input: ProductInput,
    ) -> Result<Product, CatalogServiceError> {
        require_fields(&input, PRODUCT_RULES)?;

        product.updated_at = Utc::now();
        self.products.save(&product).await?;
        Ok(product)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> DeleteProductUseCase<P> {
    /// Removes the product row. Its images and reviews stay behind.
    pub async fn execute(&self, raw_id: &str) -> Result<(), CatalogServiceError> {
        let id = require_id(raw_id, PRODUCT_ID)?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)?;
        self.products.delete(id).await?;

        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
