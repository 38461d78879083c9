use async_trait::async_trait;

use crate::inventory::{ContinuationToken, Item, Page, UpdateDirective};

use super::Result;

/// Store client for the product table.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Gets an item by its identifier.
    async fn get_item(&self, product_id: &str) -> Result<Option<Item>>;

    /// Reads one page of the table, resuming after `start` when given.
    async fn scan_page(&self, start: Option<ContinuationToken>) -> Result<Page>;

    /// Stores an item, replacing any item with the same identifier.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Sets one field of an item and returns the updated attributes.
    async fn update_item(&self, directive: &UpdateDirective) -> Result<Item>;

    /// Deletes an item and returns its prior value, if any.
    async fn delete_item(&self, product_id: &str) -> Result<Option<Item>>;
}
