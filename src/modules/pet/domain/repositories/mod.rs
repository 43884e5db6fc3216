pub mod pet_repository;

pub use pet_repository::PetRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
