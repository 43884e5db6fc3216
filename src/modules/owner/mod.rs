//! Owner bounded context

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::commands::{RegisterOwnerCommand, UpdateOwnerCommand};
pub use application::dto::{AddressDto, OwnerDto};
pub use application::service::OwnerService;
pub use domain::{Owner, OwnerId, OwnerRepository};
pub use infrastructure::persistence::OwnerRepositoryImpl;
