//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ItemStore` trait
//! defined in `inventory_core::storage`. The backend is selected at startup
//! from the `STORAGE_BACKEND` setting.
//!
//! - `dynamodb` (default): AWS DynamoDB table using `aws-sdk-dynamodb`
//! - `memory`: process-local ordered map, for local runs and tests

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;
