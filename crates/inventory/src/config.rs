use clap::{Parser, ValueEnum};

use inventory_core::inventory::{
    RoutePaths, DEFAULT_HEALTH_PATH, DEFAULT_PRODUCTS_PATH, DEFAULT_PRODUCT_KEY,
    DEFAULT_PRODUCT_PATH,
};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// AWS DynamoDB table.
    Dynamodb,
    /// Process-local map (data is lost when the process exits).
    Memory,
}

/// Inventory - product CRUD over a DynamoDB table
///
/// The Lambda runtime starts the binary without arguments, so every option
/// is read from its environment variable when the flag is absent.
#[derive(Parser, Debug, Clone)]
#[command(name = "inventory")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// AWS region of the table
    #[arg(long, default_value = "us-east-1", env = "AWS_REGION")]
    pub region: String,

    /// Name of the DynamoDB table holding the products
    #[arg(long, default_value = "product-inventory", env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// Custom endpoint URL (for local DynamoDB)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Key attribute of the table
    #[arg(long, default_value = DEFAULT_PRODUCT_KEY, env = "PRODUCT_KEY")]
    pub product_key: String,

    /// Health check resource path
    #[arg(long, default_value = DEFAULT_HEALTH_PATH, env = "HEALTH_PATH")]
    pub health_path: String,

    /// Single product resource path
    #[arg(long, default_value = DEFAULT_PRODUCT_PATH, env = "PRODUCT_PATH")]
    pub product_path: String,

    /// Product collection resource path
    #[arg(long, default_value = DEFAULT_PRODUCTS_PATH, env = "PRODUCTS_PATH")]
    pub products_path: String,

    /// Storage backend
    #[arg(long = "storage", value_enum, default_value = "dynamodb", env = "STORAGE_BACKEND")]
    pub storage: StorageBackend,

    /// Scan page size of the in-memory backend
    #[arg(long, default_value = "100", env = "MEMORY_PAGE_SIZE")]
    pub memory_page_size: usize,
}

impl Config {
    /// Load configuration from command-line flags and environment variables.
    pub fn load() -> Self {
        Self::parse()
    }

    /// The resource paths requests are routed on.
    pub fn route_paths(&self) -> RoutePaths {
        RoutePaths {
            health: self.health_path.clone(),
            product: self.product_path.clone(),
            products: self.products_path.clone(),
        }
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match (self.storage, &self.endpoint_url) {
            (StorageBackend::Memory, _) => "In-memory store".to_string(),
            (StorageBackend::Dynamodb, Some(url)) => {
                format!("Local DynamoDB ({url}, table: {})", self.table_name)
            }
            (StorageBackend::Dynamodb, None) => format!(
                "AWS DynamoDB (region: {}, table: {})",
                self.region, self.table_name
            ),
        }
    }
}
