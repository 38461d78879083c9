//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the `ItemStore` trait
//! that keeps all products in an ordered map wrapped in `Arc<RwLock<_>>`. This
//! is useful for testing and for running the function locally without a table.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new("productId", 25);
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryStore;
