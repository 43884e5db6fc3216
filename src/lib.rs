pub mod modules;
pub mod shared;

use modules::{
    owner::{OwnerRepository, OwnerRepositoryImpl, OwnerService},
    pet::{PetRepository, PetRepositoryImpl, PetService},
};
use shared::utils::init_logger;
use shared::{AppConfig, AppResult};
use std::sync::Arc;

/// Services wired over the in-memory stores
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<OwnerService>,
    pub pet_service: Arc<PetService>,
}

impl AppState {
    pub fn build(config: &AppConfig) -> Self {
        init_logger(config.log_level);

        // Initialize repositories; pets share the owner store for existence checks
        let owner_repo: Arc<dyn OwnerRepository> =
            Arc::new(OwnerRepositoryImpl::new(config.enforce_unique_email));
        let pet_repo: Arc<dyn PetRepository> = Arc::new(PetRepositoryImpl::new());

        // Initialize services
        let owner_service = Arc::new(OwnerService::new(Arc::clone(&owner_repo)));
        let pet_service = Arc::new(PetService::new(
            Arc::clone(&pet_repo),
            Arc::clone(&owner_repo),
        ));

        log::info!(
            "Pet clinic services ready (unique email enforced: {})",
            config.enforce_unique_email
        );

        Self {
            owner_service,
            pet_service,
        }
    }

    /// Reads configuration from the environment (and `.env`) before wiring
    pub fn from_env() -> AppResult<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::build(&config))
    }
}
