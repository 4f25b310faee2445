use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::expiration::ExpirationDate;

/// A stored inventory item, exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// `DD/MM/YYYY`, kept as the client sent it.
    pub expiration: String,
    pub price: f64,
}

/// Create payload.
///
/// Absent fields decode to their zero value so that "missing" and "empty" are
/// both reported by [`NewProduct::validate`] instead of failing the decode.
/// A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: Option<bool>,
    pub expiration: String,
    pub price: f64,
}

impl NewProduct {
    /// Decode a request body regardless of its declared content type.
    ///
    /// A literal `null` decodes to the all-zero payload, which then fails
    /// [`NewProduct::validate`] as missing fields.
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        let payload: Option<Self> = serde_json::from_slice(body)?;
        Ok(payload.unwrap_or_default())
    }

    /// Field-level checks, first failure wins: required fields, then the
    /// expiration date. Code uniqueness is the store's concern.
    pub fn validate(&self) -> DomainResult<ExpirationDate> {
        if self.name.is_empty()
            || self.quantity <= 0
            || self.code_value.is_empty()
            || self.price <= 0.0
            || self.price.is_nan()
        {
            return Err(DomainError::MissingOrInvalidField);
        }

        ExpirationDate::parse(&self.expiration)
    }

    /// Build the stored record under an identifier assigned by the store.
    pub fn into_product(self, id: ProductId) -> Product {
        // null, absent and false all publish as false
        let is_published = self.is_published.unwrap_or(false);

        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}

/// Catalog loaded at process start.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Cheese - St. Andre".to_string(),
            quantity: 60,
            code_value: "S73191A".to_string(),
            is_published: true,
            expiration: "12/04/2022".to_string(),
            price: 50.15,
        },
        Product {
            id: ProductId::new(2),
            name: "Apples".to_string(),
            quantity: 100,
            code_value: "A12345".to_string(),
            is_published: true,
            expiration: "25/12/2022".to_string(),
            price: 1.99,
        },
    ]
}
