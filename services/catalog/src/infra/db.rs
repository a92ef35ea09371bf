use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use shelf_catalog_schema::{product_images, products, reviews, users};

use crate::domain::repository::{
    ProductImageRepository, ProductRepository, ReviewRepository, UserRepository,
};
use crate::domain::types::{
    Product, ProductDetail, ProductImage, Review, ReviewWithAuthor, User,
};
use crate::error::CatalogServiceError;

/// Map a unique-constraint violation to `Conflict`, anything else to `Internal`.
fn write_error(err: DbErr, conflict: &'static str, context: &'static str) -> CatalogServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CatalogServiceError::Conflict(conflict),
        _ => CatalogServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), CatalogServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            name: Set(user.name.clone()),
            role: Set(user.role.clone()),
            avatar: Set(user.avatar.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "email already exists", "create user"))?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        role: model.role,
        avatar: model.avatar,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl DbProductRepository {
    /// Resolve images (by position) and reviews (with authors) for `models`,
    /// keeping the input order.
    async fn with_relations(
        &self,
        models: Vec<products::Model>,
    ) -> Result<Vec<ProductDetail>, CatalogServiceError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let images = models
            .load_many(product_images::Entity, &self.db)
            .await
            .context("load product images")?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let rows = reviews::Entity::find()
            .filter(reviews::Column::ProductId.is_in(ids))
            .order_by_asc(reviews::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("load product reviews")?;
        let mut reviews_by_product: HashMap<Uuid, Vec<ReviewWithAuthor>> = HashMap::new();
        for row in rows {
            let entry = review_with_author(row);
            reviews_by_product
                .entry(entry.review.product_id)
                .or_default()
                .push(entry);
        }

        let details = models
            .into_iter()
            .zip(images)
            .map(|(model, image_models)| {
                let mut images: Vec<ProductImage> =
                    image_models.into_iter().map(image_from_model).collect();
                images.sort_by_key(|image| image.position);
                let reviews = reviews_by_product.remove(&model.id).unwrap_or_default();
                ProductDetail {
                    product: product_from_model(model),
                    images,
                    reviews,
                }
            })
            .collect();
        Ok(details)
    }
}

impl ProductRepository for DbProductRepository {
    async fn list_detailed(&self) -> Result<Vec<ProductDetail>, CatalogServiceError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list products")?;
        self.with_relations(models).await
    }

    async fn find_detailed(&self, id: Uuid) -> Result<Option<ProductDetail>, CatalogServiceError> {
        let Some(model) = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?
        else {
            return Ok(None);
        };
        Ok(self.with_relations(vec![model]).await?.pop())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogServiceError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn create(&self, product: &Product) -> Result<(), CatalogServiceError> {
        product_to_active(product)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "SKU already exists", "create product"))?;
        Ok(())
    }

    async fn save(&self, product: &Product) -> Result<(), CatalogServiceError> {
        product_to_active(product)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "SKU already exists", "save product"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(())
    }
}

fn product_to_active(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(product.id),
        sku: Set(product.sku.clone()),
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        stock: Set(product.stock),
        created_at: Set(product.created_at),
        updated_at: Set(product.updated_at),
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        sku: model.sku,
        name: model.name,
        description: model.description,
        price: model.price,
        stock: model.stock,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Product image repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductImageRepository {
    pub db: DatabaseConnection,
}

impl ProductImageRepository for DbProductImageRepository {
    async fn max_position(&self, product_id: Uuid) -> Result<Option<i32>, CatalogServiceError> {
        let max = product_images::Entity::find()
            .select_only()
            .column_as(product_images::Column::Position.max(), "max_position")
            .filter(product_images::Column::ProductId.eq(product_id))
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await
            .context("max image position")?;
        Ok(max.flatten())
    }

    async fn create(&self, image: &ProductImage) -> Result<(), CatalogServiceError> {
        product_images::ActiveModel {
            id: Set(image.id),
            product_id: Set(image.product_id),
            url: Set(image.url.clone()),
            alt: Set(image.alt.clone()),
            position: Set(image.position),
        }
        .insert(&self.db)
        .await
        .context("create product image")?;
        Ok(())
    }
}

fn image_from_model(model: product_images::Model) -> ProductImage {
    ProductImage {
        id: model.id,
        product_id: model.product_id,
        url: model.url,
        alt: model.alt,
        position: model.position,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list_with_authors(&self) -> Result<Vec<ReviewWithAuthor>, CatalogServiceError> {
        let rows = reviews::Entity::find()
            .order_by_asc(reviews::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list reviews")?;
        Ok(rows.into_iter().map(review_with_author).collect())
    }

    async fn list_by_product_with_authors(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ReviewWithAuthor>, CatalogServiceError> {
        let rows = reviews::Entity::find()
            .filter(reviews::Column::ProductId.eq(product_id))
            .order_by_asc(reviews::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list reviews by product")?;
        Ok(rows.into_iter().map(review_with_author).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, CatalogServiceError> {
        let model = reviews::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find review by id")?;
        Ok(model.map(review_from_model))
    }

    async fn create(&self, review: &Review) -> Result<(), CatalogServiceError> {
        review_to_active(review)
            .insert(&self.db)
            .await
            .context("create review")?;
        Ok(())
    }

    async fn save(&self, review: &Review) -> Result<(), CatalogServiceError> {
        review_to_active(review)
            .update(&self.db)
            .await
            .context("save review")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        reviews::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete review")?;
        Ok(())
    }
}

fn review_to_active(review: &Review) -> reviews::ActiveModel {
    reviews::ActiveModel {
        id: Set(review.id),
        product_id: Set(review.product_id),
        user_id: Set(review.user_id),
        title: Set(review.title.clone()),
        body: Set(review.body.clone()),
        rating: Set(review.rating),
        created_at: Set(review.created_at),
        updated_at: Set(review.updated_at),
    }
}

fn review_from_model(model: reviews::Model) -> Review {
    Review {
        id: model.id,
        product_id: model.product_id,
        user_id: model.user_id,
        title: model.title,
        body: model.body,
        rating: model.rating,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn review_with_author((review, author): (reviews::Model, Option<users::Model>)) -> ReviewWithAuthor {
    ReviewWithAuthor {
        review: review_from_model(review),
        author: author.map(user_from_model),
    }
}
