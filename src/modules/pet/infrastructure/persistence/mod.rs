pub mod pet_repository_impl;

pub use pet_repository_impl::PetRepositoryImpl;
