//! Pure route matching for inbound events.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_PRODUCT_PATH: &str = "/product";
pub const DEFAULT_PRODUCTS_PATH: &str = "/products";

/// The resource paths the function is mounted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePaths {
    pub health: String,
    pub product: String,
    pub products: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            health: DEFAULT_HEALTH_PATH.to_string(),
            product: DEFAULT_PRODUCT_PATH.to_string(),
            products: DEFAULT_PRODUCTS_PATH.to_string(),
        }
    }
}

/// The operation selected for an inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    GetProduct,
    ListProducts,
    SaveProduct,
    UpdateProduct,
    DeleteProduct,
    NotFound,
}

/// Selects the route for a method and path.
///
/// Matching is exact: methods are compared case-sensitively and paths must
/// equal one of the configured resource paths. Arms are checked in order
/// and the first match wins.
pub fn match_route(method: &str, path: &str, paths: &RoutePaths) -> Route {
    match method {
        "GET" if path == paths.health => Route::Health,
        "GET" if path == paths.product => Route::GetProduct,
        "GET" if path == paths.products => Route::ListProducts,
        "POST" if path == paths.product => Route::SaveProduct,
        "PATCH" if path == paths.product => Route::UpdateProduct,
        "DELETE" if path == paths.product => Route::DeleteProduct,
        _ => Route::NotFound,
    }
}
