//! Owner-specific value objects

pub mod address;
pub mod contact_information;
pub mod full_name;
pub mod owner_id;

pub use address::Address;
pub use contact_information::ContactInformation;
pub use full_name::FullName;
pub use owner_id::OwnerId;
