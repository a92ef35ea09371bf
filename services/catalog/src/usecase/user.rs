use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::CatalogServiceError;

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    /// Look up an account by the raw path id. Ids that are not UUIDs can
    /// never match a row and are reported as not found.
    pub async fn execute(&self, raw_id: &str) -> Result<User, CatalogServiceError> {
        let id = raw_id
            .parse::<Uuid>()
            .map_err(|_| CatalogServiceError::UserNotFound)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)
    }
}
