//! Product storage abstractions.

pub mod product_store;

pub use product_store::{InMemoryProductStore, ProductStore};
