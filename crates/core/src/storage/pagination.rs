//! Collects a full table scan from bounded pages.

use crate::inventory::Item;

use super::{ItemStore, Result};

/// Scans the whole collection, following continuation tokens until the
/// store stops returning one.
///
/// Items keep the order the store returned them in, page by page. A failure
/// on any page aborts the scan; no partial result is returned.
pub async fn scan_all<S: ItemStore + ?Sized>(store: &S) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut start = None;

    loop {
        let page = store.scan_page(start).await?;
        items.extend(page.items);

        match page.continuation {
            Some(token) => start = Some(token),
            None => return Ok(items),
        }
    }
}
