//! Product CRUD handlers.
//!
//! Each handler performs one store call and turns a store failure into a 500
//! response itself; the error is logged and never shown to the caller.

use inventory_core::inventory::{
    ApiResponse, DeleteResponse, Item, ProductsResponse, SaveResponse, UpdateDirective,
    UpdateResponse,
};
use inventory_core::storage::{scan_all, ItemStore};

/// Get a single product (GET /product?productId=...).
///
/// A missing identifier or an unknown product yields 200 with no body.
pub async fn get_product(store: &dyn ItemStore, product_id: Option<&str>) -> ApiResponse {
    let Some(product_id) = product_id.filter(|id| !id.is_empty()) else {
        tracing::debug!("Get product without productId");
        return ApiResponse::empty(200);
    };

    match store.get_item(product_id).await {
        Ok(Some(item)) => ApiResponse::ok(&item),
        Ok(None) => {
            tracing::debug!(product_id, "Product not found");
            ApiResponse::empty(200)
        }
        Err(e) => {
            tracing::error!(error = %e, product_id, "Error in Get Product");
            ApiResponse::internal_error()
        }
    }
}

/// List every product (GET /products).
pub async fn list_products(store: &dyn ItemStore) -> ApiResponse {
    match scan_all(store).await {
        Ok(products) => {
            tracing::debug!(count = products.len(), "Listed products");
            ApiResponse::ok(&ProductsResponse { products })
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in Get Products");
            ApiResponse::internal_error()
        }
    }
}

/// Create or replace a product (POST /product).
pub async fn save_product(store: &dyn ItemStore, item: Item) -> ApiResponse {
    match store.put_item(&item).await {
        Ok(()) => {
            tracing::info!("Saved product");
            ApiResponse::ok(&SaveResponse::new(item))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in Save Product");
            ApiResponse::operation_failed("Error in Save Product")
        }
    }
}

/// Set one field of a product (PATCH /product).
pub async fn update_product(store: &dyn ItemStore, directive: UpdateDirective) -> ApiResponse {
    match store.update_item(&directive).await {
        Ok(updated) => {
            tracing::info!(
                product_id = %directive.product_id,
                field = %directive.field,
                "Updated product"
            );
            ApiResponse::ok(&UpdateResponse::new(updated))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                product_id = %directive.product_id,
                field = %directive.field,
                "Error in Update Product"
            );
            ApiResponse::operation_failed("Error in Update Product")
        }
    }
}

/// Delete a product (DELETE /product).
pub async fn delete_product(store: &dyn ItemStore, product_id: &str) -> ApiResponse {
    match store.delete_item(product_id).await {
        Ok(prior) => {
            tracing::info!(product_id, existed = prior.is_some(), "Deleted product");
            ApiResponse::ok(&DeleteResponse::new(prior))
        }
        Err(e) => {
            tracing::error!(error = %e, product_id, "Error in Delete Product");
            ApiResponse::operation_failed("Error in Delete Product")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use serde_json::{json, Value};

    fn product(value: Value) -> Item {
        value.as_object().cloned().unwrap()
    }

    fn body(response: &ApiResponse) -> Value {
        serde_json::from_str(response.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let store = InMemoryStore::default();
        store
            .put_item(&product(json!({"productId": "p1", "price": 10})))
            .await
            .unwrap();

        let response = get_product(&store, Some("p1")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response), json!({"productId": "p1", "price": 10}));
    }

    #[tokio::test]
    async fn test_get_product_missing_id_is_empty_success() {
        let store = InMemoryStore::default();

        let missing = get_product(&store, None).await;
        let blank = get_product(&store, Some("")).await;

        assert_eq!(missing, ApiResponse::empty(200));
        assert_eq!(blank, ApiResponse::empty(200));
    }

    #[tokio::test]
    async fn test_list_products_wraps_items() {
        let store = InMemoryStore::new("productId", 1);
        for id in ["a", "b"] {
            store
                .put_item(&product(json!({ "productId": id })))
                .await
                .unwrap();
        }

        let response = list_products(&store).await;

        assert_eq!(
            body(&response),
            json!({"products": [{"productId": "a"}, {"productId": "b"}]})
        );
    }

    #[tokio::test]
    async fn test_list_products_empty_table() {
        let store = InMemoryStore::default();

        let response = list_products(&store).await;

        assert_eq!(body(&response), json!({"products": []}));
    }

    #[tokio::test]
    async fn test_save_product_rejected_by_store() {
        let store = InMemoryStore::default();

        let response = save_product(&store, product(json!({"price": 10}))).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response), json!({"message": "Error in Save Product"}));
    }

    #[tokio::test]
    async fn test_update_product_rejected_by_store() {
        let store = InMemoryStore::default();

        let response = update_product(
            &store,
            UpdateDirective::new("p1", "productId", json!("p2")),
        )
        .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response), json!({"message": "Error in Update Product"}));
    }

    #[tokio::test]
    async fn test_delete_unknown_product_returns_empty_item() {
        let store = InMemoryStore::default();

        let response = delete_product(&store, "ghost").await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response),
            json!({"Operation": "DELETE", "Message": "SUCCESS", "Item": {}})
        );
    }
}
