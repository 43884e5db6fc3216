use async_trait::async_trait;

use crate::modules::owner::domain::{aggregates::Owner, value_objects::OwnerId};
use crate::shared::errors::AppResult;

/// Persistence port for owners
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Fails with `NotFound` when no owner has this id
    async fn find_by_id(&self, id: &OwnerId) -> AppResult<Owner>;

    /// Insert or replace by id
    async fn save(&self, owner: &Owner) -> AppResult<()>;

    /// `email` is expected already trimmed and lower-cased
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Owner>>;
}
