pub mod owner;

pub use owner::Owner;
