use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::CONTENT_TYPE;

use crate::domain::repository::ImageSource;
use crate::error::CatalogServiceError;

/// Media type recorded when the remote server does not send one.
pub const FALLBACK_MEDIA_TYPE: &str = "image/png";

/// Build a `data:<media-type>;base64,<payload>` string.
pub fn encode_inline(media_type: Option<&str>, payload: &[u8]) -> String {
    let media_type = media_type
        .filter(|mt| !mt.is_empty())
        .unwrap_or(FALLBACK_MEDIA_TYPE);
    format!("data:{media_type};base64,{}", STANDARD.encode(payload))
}

/// Fetches images over HTTP. The payload is stored as-is, whatever it is.
#[derive(Clone)]
pub struct HttpImageSource {
    pub client: reqwest::Client,
}

impl ImageSource for HttpImageSource {
    async fn fetch_inline(&self, url: &str) -> Result<String, CatalogServiceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetch image {url}"))
            .map_err(CatalogServiceError::ImageFetch)?;

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let payload = response
            .bytes()
            .await
            .with_context(|| format!("read image body {url}"))
            .map_err(CatalogServiceError::ImageRead)?;

        tracing::debug!(url, bytes = payload.len(), "image fetched");
        Ok(encode_inline(media_type.as_deref(), &payload))
    }
}
