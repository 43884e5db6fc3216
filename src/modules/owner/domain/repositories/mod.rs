pub mod owner_repository;

pub use owner_repository::OwnerRepository;
#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
