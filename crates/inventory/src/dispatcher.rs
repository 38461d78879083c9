//! Routes inbound events to product handlers.

use std::sync::Arc;

use inventory_core::inventory::{
    match_route, parse_body, parse_item, ApiResponse, DeleteProductRequest, InboundEvent, Route,
    RoutePaths, UpdateProductRequest,
};
use inventory_core::storage::ItemStore;

use crate::error::AppError;
use crate::handlers::{health, products};

/// Query parameter carrying the identifier on get-one.
pub const PRODUCT_ID_PARAM: &str = "productId";

/// Dispatches events against an injected store.
///
/// Cloning is cheap: the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn ItemStore>,
    paths: RoutePaths,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn ItemStore>, paths: RoutePaths) -> Self {
        Self { store, paths }
    }

    /// Handles one event.
    ///
    /// Never fails: anything a handler does not turn into a response itself
    /// is logged and answered with a generic 500.
    pub async fn dispatch(&self, event: InboundEvent) -> ApiResponse {
        tracing::info!(
            method = %event.method,
            path = %event.path,
            "Request event"
        );

        match self.route(&event).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        }
    }

    async fn route(&self, event: &InboundEvent) -> Result<ApiResponse, AppError> {
        let store = self.store.as_ref();

        let response = match match_route(&event.method, &event.path, &self.paths) {
            Route::Health => health::health(),
            Route::GetProduct => {
                products::get_product(store, event.query_parameter(PRODUCT_ID_PARAM)).await
            }
            Route::ListProducts => products::list_products(store).await,
            Route::SaveProduct => {
                let item = parse_item(event.body_text()?)?;
                products::save_product(store, item).await
            }
            Route::UpdateProduct => {
                let request: UpdateProductRequest = parse_body(event.body_text()?)?;
                products::update_product(store, request.into_directive()).await
            }
            Route::DeleteProduct => {
                let request: DeleteProductRequest = parse_body(event.body_text()?)?;
                products::delete_product(store, &request.product_id).await
            }
            Route::NotFound => {
                tracing::debug!(method = %event.method, path = %event.path, "No route");
                ApiResponse::not_found()
            }
        };

        Ok(response)
    }
}
