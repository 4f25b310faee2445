//! Product operations behind the HTTP handlers.

use std::sync::Arc;

use catalog_core::{DomainResult, ProductId};
use catalog_infra::{InMemoryProductStore, ProductStore};
use catalog_products::{NewProduct, Product, sample_products};

/// Shared application state, injected into handlers as an `Extension`.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// In-memory store, optionally pre-loaded with the sample catalog.
    pub fn in_memory(seed_sample_data: bool) -> Self {
        let store = if seed_sample_data {
            InMemoryProductStore::with_seed(sample_products())
        } else {
            InMemoryProductStore::new()
        };
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &Arc<dyn ProductStore> {
        &self.store
    }

    /// Validate, then store under a fresh identifier.
    ///
    /// Nothing is written unless every check passes.
    pub fn create_product(&self, payload: NewProduct) -> DomainResult<Product> {
        payload.validate()?;
        let product = self.store.insert_unique(payload)?;
        tracing::info!(id = %product.id, code_value = %product.code_value, "product created");
        Ok(product)
    }

    /// Look a product up by its path-supplied identifier.
    pub fn get_product(&self, raw_id: &str) -> DomainResult<Product> {
        let id: ProductId = raw_id.parse()?;
        self.store
            .find_by_id(id)
            .ok_or_else(catalog_core::DomainError::not_found)
    }
}
