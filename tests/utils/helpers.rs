/// Test helper functions and service builders
use petclinic_lib::modules::{
    owner::{OwnerDto, OwnerRepositoryImpl, OwnerService},
    pet::{PetRepositoryImpl, PetService},
};
use petclinic_lib::shared::utils::init_logger;
use std::sync::Arc;

use super::factories::OwnerCommandFactory;

pub struct TestServices {
    pub owner_service: Arc<OwnerService>,
    pub pet_service: Arc<PetService>,
    pub owner_repository: Arc<OwnerRepositoryImpl>,
    pub pet_repository: Arc<PetRepositoryImpl>,
}

/// Build services over fresh in-memory stores with unique emails enforced
pub fn build_test_services() -> TestServices {
    build_test_services_with(true)
}

pub fn build_test_services_with(enforce_unique_email: bool) -> TestServices {
    init_logger(log::LevelFilter::Debug);

    let owner_repository = Arc::new(OwnerRepositoryImpl::new(enforce_unique_email));
    let pet_repository = Arc::new(PetRepositoryImpl::new());

    let owner_service = Arc::new(OwnerService::new(owner_repository.clone()));
    let pet_service = Arc::new(PetService::new(
        pet_repository.clone(),
        owner_repository.clone(),
    ));

    TestServices {
        owner_service,
        pet_service,
        owner_repository,
        pet_repository,
    }
}

/// Register the default owner, optionally with a distinct email
pub async fn register_owner(services: &TestServices, email: &str) -> OwnerDto {
    services
        .owner_service
        .register_owner(&OwnerCommandFactory::new().with_email(email).build())
        .await
        .expect("owner registration should succeed")
}
