//! Pet-specific value objects

pub mod medical_record_id;
pub mod pet_id;
pub mod pet_name;
pub mod species;
pub mod treatment;

pub use medical_record_id::MedicalRecordId;
pub use pet_id::PetId;
pub use pet_name::PetName;
pub use species::Species;
pub use treatment::Treatment;
