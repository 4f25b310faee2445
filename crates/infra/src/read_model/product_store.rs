use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainError, DomainResult, ProductId};
use catalog_products::{NewProduct, Product};

/// Authoritative product collection plus the identifier counter.
pub trait ProductStore: Send + Sync {
    /// Assign the next identifier and append, as one step.
    fn append(&self, product: NewProduct) -> ProductId;

    /// Like [`ProductStore::append`], but fails with
    /// [`DomainError::DuplicateCode`] if the code value is taken. The check
    /// and the append happen under the same exclusive access.
    fn insert_unique(&self, product: NewProduct) -> DomainResult<Product>;

    fn find_by_id(&self, id: ProductId) -> Option<Product>;

    fn exists_by_code(&self, code_value: &str) -> bool;

    /// Number of stored records, seeded ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recently assigned identifier (zero before the first assignment).
    fn last_id(&self) -> ProductId;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn append(&self, product: NewProduct) -> ProductId {
        (**self).append(product)
    }

    fn insert_unique(&self, product: NewProduct) -> DomainResult<Product> {
        (**self).insert_unique(product)
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn exists_by_code(&self, code_value: &str) -> bool {
        (**self).exists_by_code(code_value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn last_id(&self) -> ProductId {
        (**self).last_id()
    }
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    last_id: ProductId,
}

impl Inner {
    fn push(&mut self, product: NewProduct) -> &Product {
        self.last_id = self.last_id.next();
        self.products.push(product.into_product(self.last_id));
        &self.products[self.products.len() - 1]
    }
}

/// In-memory store: an ordered `Vec` and the counter behind one `RwLock`.
///
/// Writers hold the write lock across increment and append, so readers see a
/// record fully or not at all.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load pre-existing records. The counter starts at the largest seeded
    /// identifier so later assignments never collide with them.
    pub fn with_seed(seed: Vec<Product>) -> Self {
        let last_id = seed.iter().map(|p| p.id).max().unwrap_or_default();
        Self {
            inner: RwLock::new(Inner {
                products: seed,
                last_id,
            }),
        }
    }

    // No operation leaves `Inner` half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for InMemoryProductStore {
    fn append(&self, product: NewProduct) -> ProductId {
        let mut inner = self.write();
        let id = inner.push(product).id;
        tracing::debug!(%id, "product appended");
        id
    }

    fn insert_unique(&self, product: NewProduct) -> DomainResult<Product> {
        let mut inner = self.write();
        if inner.products.iter().any(|p| p.code_value == product.code_value) {
            return Err(DomainError::duplicate_code(product.code_value));
        }
        let stored = inner.push(product).clone();
        tracing::debug!(id = %stored.id, code_value = %stored.code_value, "product appended");
        Ok(stored)
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    fn exists_by_code(&self, code_value: &str) -> bool {
        self.read().products.iter().any(|p| p.code_value == code_value)
    }

    fn len(&self) -> usize {
        self.read().products.len()
    }

    fn last_id(&self) -> ProductId {
        self.read().last_id
    }
}
