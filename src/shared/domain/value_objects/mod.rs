//! Clinic-wide value objects

mod veterinarian_id;

pub use veterinarian_id::VeterinarianId;
