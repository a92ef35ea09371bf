use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Role assigned to every account created through registration.
pub const DEFAULT_ROLE: &str = "user";

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Account record. `password_hash` is the only stored form of the password.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: String,
    /// Inline `data:` URL.
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Inline `data:` URL produced by the image source.
    pub url: String,
    pub alt: Option<String>,
    /// 1-based rank within the product's gallery.
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub body: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review with its author resolved. `author` is `None` when the referenced
/// account no longer exists.
#[derive(Debug, Clone)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author: Option<User>,
}

/// A product with its gallery (ordered by position) and reviews.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub reviews: Vec<ReviewWithAuthor>,
}

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Fixed two-decimal rendering used when checking that a price was supplied.
pub fn format_price(price: &Decimal) -> String {
    format!("{price:.2}")
}

/// Position for the next image appended after `current_max`.
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(1, |max| max + 1)
}

/// A field in a partial update: either left out of the request or supplied.
///
/// An explicit JSON `null` counts as absent; an empty string is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Present(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
