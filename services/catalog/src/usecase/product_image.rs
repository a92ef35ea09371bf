use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::repository::{ImageSource, ProductImageRepository};
use crate::domain::types::{ProductImage, next_position};
use crate::domain::validation::require_id;
use crate::error::CatalogServiceError;

pub struct AttachImageInput {
    pub product_id: String,
    pub url: String,
    pub alt: Option<String>,
    /// Accepted for compatibility; the stored position is always computed.
    pub position: Option<i32>,
}

pub struct AttachImageUseCase<R: ProductImageRepository, I: ImageSource> {
    pub images: R,
    pub source: I,
}

impl<R: ProductImageRepository, I: ImageSource> AttachImageUseCase<R, I> {
    /// Ingest `input.url` and append it to the end of the product's gallery.
    pub async fn execute(&self, input: AttachImageInput) -> Result<ProductImage, CatalogServiceError> {
        let product_id = require_id(&input.product_id, "product ID")?;

        let inline = self.source.fetch_inline(&input.url).await?;

        if let Some(requested) = input.position {
            debug!(%product_id, requested, "ignoring caller-supplied image position");
        }

        // Read-then-insert without a lock: concurrent attachments to one
        // product can end up sharing a position.
        let current_max = self.images.max_position(product_id).await?;
        let image = ProductImage {
            id: Uuid::now_v7(),
            product_id,
            url: inline,
            alt: input.alt,
            position: next_position(current_max),
        };
        self.images.create(&image).await?;

        info!(%product_id, image_id = %image.id, position = image.position, "image attached");
        Ok(image)
    }
}
