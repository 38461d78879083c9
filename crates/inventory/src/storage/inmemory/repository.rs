//! In-memory store implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use inventory_core::inventory::{
    product_id, ContinuationToken, Item, Page, UpdateDirective, DEFAULT_PRODUCT_KEY,
};
use inventory_core::storage::{ItemStore, RepositoryError, Result};

/// Default number of items returned per scan page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory store behaving like a DynamoDB table with a string hash key.
///
/// Items are kept ordered by identifier in a `BTreeMap` wrapped in
/// `Arc<RwLock<_>>`. Scans return at most `page_size` items per page.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
    key_name: String,
    page_size: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_KEY, DEFAULT_PAGE_SIZE)
    }
}

impl InMemoryStore {
    /// Creates a new empty store. A page size of zero is treated as one.
    pub fn new(key_name: impl Into<String>, page_size: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            key_name: key_name.into(),
            page_size: page_size.max(1),
        }
    }

    fn key_of(&self, item: &Item) -> Result<String> {
        product_id(item, &self.key_name)
            .map(str::to_string)
            .ok_or_else(|| {
                RepositoryError::InvalidData(format!(
                    "Missing string key attribute: {}",
                    self.key_name
                ))
            })
    }

    fn token_for(&self, key: &str) -> ContinuationToken {
        let mut token = Item::new();
        token.insert(self.key_name.clone(), Value::String(key.to_string()));
        ContinuationToken::new(token)
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn get_item(&self, product_id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(product_id).cloned())
    }

    async fn scan_page(&self, start: Option<ContinuationToken>) -> Result<Page> {
        let lower = match &start {
            Some(token) => Bound::Excluded(self.key_of(token.as_item())?),
            None => Bound::Unbounded,
        };

        let items = self.items.read().await;
        let mut remaining = items.range((lower, Bound::Unbounded));
        let page: Vec<(&String, &Item)> = remaining.by_ref().take(self.page_size).collect();
        let has_more = remaining.next().is_some();

        let continuation = match page.last() {
            Some((key, _)) if has_more => Some(self.token_for(key)),
            _ => None,
        };

        Ok(Page {
            items: page.into_iter().map(|(_, item)| item.clone()).collect(),
            continuation,
        })
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let key = self.key_of(item)?;
        let mut items = self.items.write().await;
        items.insert(key, item.clone());
        Ok(())
    }

    async fn update_item(&self, directive: &UpdateDirective) -> Result<Item> {
        if directive.field == self.key_name {
            return Err(RepositoryError::InvalidData(format!(
                "Cannot update key attribute: {}",
                self.key_name
            )));
        }

        let mut items = self.items.write().await;
        let item = items
            .entry(directive.product_id.clone())
            .or_insert_with(|| {
                let mut item = Item::new();
                item.insert(
                    self.key_name.clone(),
                    Value::String(directive.product_id.clone()),
                );
                item
            });
        item.insert(directive.field.clone(), directive.value.clone());

        let mut updated = Item::new();
        updated.insert(directive.field.clone(), directive.value.clone());
        Ok(updated)
    }

    async fn delete_item(&self, product_id: &str) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        Ok(items.remove(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::storage::scan_all;
    use serde_json::json;

    fn product(id: &str, price: i64) -> Item {
        json!({ "productId": id, "price": price })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_put_and_get_item() {
        let store = InMemoryStore::default();
        store.put_item(&product("p1", 10)).await.unwrap();

        let item = store.get_item("p1").await.unwrap();

        assert_eq!(item, Some(product("p1", 10)));
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let store = InMemoryStore::default();

        assert_eq!(store.get_item("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_item() {
        let store = InMemoryStore::default();
        store.put_item(&product("p1", 10)).await.unwrap();
        store.put_item(&product("p1", 12)).await.unwrap();

        let item = store.get_item("p1").await.unwrap().unwrap();

        assert_eq!(item["price"], json!(12));
    }

    #[tokio::test]
    async fn test_put_without_key_fails() {
        let store = InMemoryStore::default();
        let item = json!({"price": 10}).as_object().cloned().unwrap();

        let result = store.put_item(&item).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_scan_pages_by_page_size() {
        let store = InMemoryStore::new("productId", 2);
        for id in ["p1", "p2", "p3", "p4", "p5"] {
            store.put_item(&product(id, 1)).await.unwrap();
        }

        let first = store.scan_page(None).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert!(!first.is_last());

        let second = store.scan_page(first.continuation).await.unwrap();
        assert_eq!(second.items[0]["productId"], json!("p3"));

        let third = store.scan_page(second.continuation).await.unwrap();
        assert_eq!(third.items.len(), 1);
        assert!(third.is_last());
    }

    #[tokio::test]
    async fn test_scan_exact_multiple_has_no_trailing_page() {
        let store = InMemoryStore::new("productId", 2);
        for id in ["p1", "p2", "p3", "p4"] {
            store.put_item(&product(id, 1)).await.unwrap();
        }

        let first = store.scan_page(None).await.unwrap();
        let second = store.scan_page(first.continuation).await.unwrap();

        assert_eq!(second.items.len(), 2);
        assert!(second.is_last());
    }

    #[tokio::test]
    async fn test_scan_all_over_in_memory_pages() {
        let store = InMemoryStore::new("productId", 3);
        for i in 0..10 {
            store.put_item(&product(&format!("p{i:02}"), i)).await.unwrap();
        }

        let items = scan_all(&store).await.unwrap();

        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["productId"], json!("p00"));
        assert_eq!(items[9]["productId"], json!("p09"));
    }

    #[tokio::test]
    async fn test_update_sets_single_field() {
        let store = InMemoryStore::default();
        let mut item = product("p1", 10);
        item.insert("name".to_string(), json!("Lamp"));
        store.put_item(&item).await.unwrap();

        let updated = store
            .update_item(&UpdateDirective::new("p1", "price", json!(20)))
            .await
            .unwrap();

        assert_eq!(Value::Object(updated), json!({"price": 20}));
        let stored = store.get_item("p1").await.unwrap().unwrap();
        assert_eq!(
            Value::Object(stored),
            json!({"productId": "p1", "price": 20, "name": "Lamp"})
        );
    }

    #[tokio::test]
    async fn test_update_missing_item_creates_partial_record() {
        let store = InMemoryStore::default();

        store
            .update_item(&UpdateDirective::new("p2", "status", json!("draft")))
            .await
            .unwrap();

        let stored = store.get_item("p2").await.unwrap().unwrap();
        assert_eq!(
            Value::Object(stored),
            json!({"productId": "p2", "status": "draft"})
        );
    }

    #[tokio::test]
    async fn test_update_key_attribute_fails() {
        let store = InMemoryStore::default();

        let result = store
            .update_item(&UpdateDirective::new("p1", "productId", json!("p2")))
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_prior_item() {
        let store = InMemoryStore::default();
        store.put_item(&product("p1", 10)).await.unwrap();

        let prior = store.delete_item("p1").await.unwrap();

        assert_eq!(prior, Some(product("p1", 10)));
        assert_eq!(store.get_item("p1").await.unwrap(), None);
        assert_eq!(store.delete_item("p1").await.unwrap(), None);
    }
}
