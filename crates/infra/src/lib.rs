//! Infrastructure layer: product storage.

pub mod read_model;

pub use read_model::{InMemoryProductStore, ProductStore};
