pub mod owner_repository_impl;

pub use owner_repository_impl::OwnerRepositoryImpl;
