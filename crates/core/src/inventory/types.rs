use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored product.
///
/// Items have no fixed schema: any JSON object is accepted on create and
/// persisted as-is. The only field the system relies on is the identifier,
/// which must be present for the item to be retrievable later.
pub type Item = Map<String, Value>;

/// Name of the identifier field used by the default table layout.
pub const DEFAULT_PRODUCT_KEY: &str = "productId";

/// A point mutation of a single field of a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDirective {
    pub product_id: String,
    pub field: String,
    pub value: Value,
}

impl UpdateDirective {
    pub fn new(product_id: impl Into<String>, field: impl Into<String>, value: Value) -> Self {
        Self {
            product_id: product_id.into(),
            field: field.into(),
            value,
        }
    }
}

/// Opaque marker handed out by the store to resume a scan.
///
/// Stores encode their native resume key as a JSON object so callers can
/// pass it back without knowing its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuationToken(Item);

impl ContinuationToken {
    pub fn new(key: Item) -> Self {
        Self(key)
    }

    pub fn as_item(&self) -> &Item {
        &self.0
    }

    pub fn into_item(self) -> Item {
        self.0
    }
}

/// One page of a collection scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub continuation: Option<ContinuationToken>,
}

impl Page {
    /// A page with no continuation, ending the scan.
    pub fn last(items: Vec<Item>) -> Self {
        Self {
            items,
            continuation: None,
        }
    }

    /// A page followed by more results starting after `token`.
    pub fn with_continuation(items: Vec<Item>, token: ContinuationToken) -> Self {
        Self {
            items,
            continuation: Some(token),
        }
    }

    pub fn is_last(&self) -> bool {
        self.continuation.is_none()
    }
}

/// Reads the string identifier out of an item, if it has one.
pub fn product_id<'a>(item: &'a Item, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}
