pub mod aggregates;
pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use aggregates::Pet;
pub use entities::MedicalRecord;
pub use repositories::PetRepository;
pub use value_objects::{MedicalRecordId, PetId, PetName, Species, Treatment};
