use sea_orm::DatabaseConnection;

use shelf_identity::CredentialManager;

use crate::infra::db::{
    DbProductImageRepository, DbProductRepository, DbReviewRepository, DbUserRepository,
};
use crate::infra::image::HttpImageSource;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub credentials: CredentialManager,
    pub http: reqwest::Client,
    pub default_avatar_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_image_repo(&self) -> DbProductImageRepository {
        DbProductImageRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn image_source(&self) -> HttpImageSource {
        HttpImageSource {
            client: self.http.clone(),
        }
    }
}
