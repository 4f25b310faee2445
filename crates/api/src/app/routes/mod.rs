use axum::Router;

pub mod products;
pub mod system;

/// Router for the product endpoints.
pub fn router() -> Router {
    Router::new().merge(products::router())
}
