//! Request payloads for product operations.
//!
//! Following the Functional Core pattern, these are pure data types and
//! parsing functions with no I/O.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RequestError;
use super::types::{Item, UpdateDirective};

/// Request payload for updating a single product field (PATCH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_id: String,
    pub update_key: String,
    pub update_value: Value,
}

impl UpdateProductRequest {
    pub fn into_directive(self) -> UpdateDirective {
        UpdateDirective::new(self.product_id, self.update_key, self.update_value)
    }
}

/// Request payload for deleting a product (DELETE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    pub product_id: String,
}

/// Parses a request body into a typed payload.
pub fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, RequestError> {
    let body = body.ok_or(RequestError::MissingBody)?;
    serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))
}

/// Parses a request body as a free-form item.
///
/// Any JSON object is accepted; other JSON values are rejected.
pub fn parse_item(body: Option<&str>) -> Result<Item, RequestError> {
    match parse_body::<Value>(body)? {
        Value::Object(item) => Ok(item),
        _ => Err(RequestError::NotAnObject),
    }
}
