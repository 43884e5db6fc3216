pub mod aggregates;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use aggregates::Owner;
pub use repositories::OwnerRepository;
pub use value_objects::{Address, ContactInformation, FullName, OwnerId};
