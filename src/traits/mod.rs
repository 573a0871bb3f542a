pub mod texture_backend;

pub use texture_backend::*;
