//! Products domain module.
//!
//! The product record, the create payload and its validation rules, and the
//! sample catalog loaded at startup. Pure domain logic (no IO, no HTTP, no
//! storage).

pub mod expiration;
pub mod product;

pub use expiration::ExpirationDate;
pub use product::{NewProduct, Product, sample_products};
