//! Pet bounded context

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::commands::{RegisterPetCommand, UpdatePetCommand};
pub use application::dto::PetDto;
pub use application::service::PetService;
pub use domain::{MedicalRecord, Pet, PetId, PetRepository};
pub use infrastructure::persistence::PetRepositoryImpl;
