use async_trait::async_trait;

use crate::modules::owner::domain::value_objects::OwnerId;
use crate::modules::pet::domain::{aggregates::Pet, value_objects::PetId};
use crate::shared::errors::AppResult;

/// Persistence port for pets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Fails with `NotFound` when no pet has this id
    async fn find_by_id(&self, id: &PetId) -> AppResult<Pet>;

    /// Insert or replace by id
    async fn save(&self, pet: &Pet) -> AppResult<()>;

    /// Pets whose owner id matches, in the order they were first saved
    async fn find_by_owner(&self, owner_id: &OwnerId) -> AppResult<Vec<Pet>>;
}
