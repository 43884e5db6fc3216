pub mod identifier;
pub mod value_objects;

pub use value_objects::VeterinarianId;
