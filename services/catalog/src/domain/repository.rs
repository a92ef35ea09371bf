#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Product, ProductDetail, ProductImage, Review, ReviewWithAuthor, User,
};
use crate::error::CatalogServiceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CatalogServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogServiceError>;
    /// Insert a new account. A taken email yields `Conflict`.
    async fn create(&self, user: &User) -> Result<(), CatalogServiceError>;
}

/// Repository for products, including relation-aware reads.
pub trait ProductRepository: Send + Sync {
    /// Every product with images and reviews (with authors) resolved.
    async fn list_detailed(&self) -> Result<Vec<ProductDetail>, CatalogServiceError>;
    async fn find_detailed(&self, id: Uuid) -> Result<Option<ProductDetail>, CatalogServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogServiceError>;
    /// Insert a new product. A taken SKU yields `Conflict`.
    async fn create(&self, product: &Product) -> Result<(), CatalogServiceError>;
    /// Overwrite every column of an existing product.
    async fn save(&self, product: &Product) -> Result<(), CatalogServiceError>;
    /// Remove the product row only. Images and reviews are left in place.
    async fn delete(&self, id: Uuid) -> Result<(), CatalogServiceError>;
}

/// Repository for product gallery images.
pub trait ProductImageRepository: Send + Sync {
    /// Highest position currently stored for `product_id`.
    async fn max_position(&self, product_id: Uuid) -> Result<Option<i32>, CatalogServiceError>;
    async fn create(&self, image: &ProductImage) -> Result<(), CatalogServiceError>;
}

/// Repository for reviews.
pub trait ReviewRepository: Send + Sync {
    async fn list_with_authors(&self) -> Result<Vec<ReviewWithAuthor>, CatalogServiceError>;
    async fn list_by_product_with_authors(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ReviewWithAuthor>, CatalogServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, CatalogServiceError>;
    async fn create(&self, review: &Review) -> Result<(), CatalogServiceError>;
    async fn save(&self, review: &Review) -> Result<(), CatalogServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), CatalogServiceError>;
}

/// Port for pulling a remote image into its inline `data:` representation.
pub trait ImageSource: Send + Sync {
    /// Fails with `ImageFetch` on transport errors and `ImageRead` when the
    /// body cannot be read. The payload is not checked to be an image.
    async fn fetch_inline(&self, url: &str) -> Result<String, CatalogServiceError>;
}
