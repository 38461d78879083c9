//! Response envelope and confirmation bodies.
//!
//! Field names of the confirmation bodies are part of the public contract
//! and serialize in PascalCase (`Operation`, `Message`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::Item;

pub const CONTENT_TYPE: &str = "application/json";
pub const SUCCESS_MESSAGE: &str = "SUCCESS";
pub const NOT_FOUND_MESSAGE: &str = "404 Not Found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Operation tag carried by write confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Save,
    Update,
    Delete,
}

/// Platform response envelope.
///
/// The body holds JSON text. An absent body is emitted as an empty payload
/// and omitted from the serialized envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiResponse {
    /// Builds a response with a JSON-serialized body.
    pub fn new<T: Serialize + ?Sized>(status_code: u16, body: Option<&T>) -> Self {
        let body = body.map(|value| {
            // Serializing plain data (maps, strings, derive types) cannot fail.
            serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
        });

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());

        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Self {
        Self::new(200, Some(body))
    }

    pub fn empty(status_code: u16) -> Self {
        Self::new::<()>(status_code, None)
    }

    pub fn not_found() -> Self {
        Self::new(404, Some(NOT_FOUND_MESSAGE))
    }

    pub fn internal_error() -> Self {
        Self::new(500, Some(INTERNAL_ERROR_MESSAGE))
    }

    /// A 500 response carrying an operation-specific message object.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::new(500, Some(&ErrorMessage::new(message)))
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("Content-Type").map(String::as_str)
    }
}

/// Body returned when a store operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful list operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Item>,
}

/// Body of a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveResponse {
    pub operation: Operation,
    pub message: String,
    pub item: Item,
}

impl SaveResponse {
    pub fn new(item: Item) -> Self {
        Self {
            operation: Operation::Save,
            message: SUCCESS_MESSAGE.to_string(),
            item,
        }
    }
}

/// Body of a successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateResponse {
    pub operation: Operation,
    pub message: String,
    pub updated_attributes: Item,
}

impl UpdateResponse {
    pub fn new(updated_attributes: Item) -> Self {
        Self {
            operation: Operation::Update,
            message: SUCCESS_MESSAGE.to_string(),
            updated_attributes,
        }
    }
}

/// Body of a successful delete.
///
/// `Item` holds the removed item, or an empty object when nothing was
/// stored under the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteResponse {
    pub operation: Operation,
    pub message: String,
    pub item: Item,
}

impl DeleteResponse {
    pub fn new(prior: Option<Item>) -> Self {
        Self {
            operation: Operation::Delete,
            message: SUCCESS_MESSAGE.to_string(),
            item: prior.unwrap_or_default(),
        }
    }
}
