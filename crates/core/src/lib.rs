//! `catalog-core` — shared domain building blocks.
//!
//! Identifiers and the error taxonomy used by every other crate. No IO here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
