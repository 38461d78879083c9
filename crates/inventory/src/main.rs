mod config;
mod dispatcher;
mod error;
mod event;
mod handlers;
mod storage;

use std::sync::Arc;

use inventory_core::storage::ItemStore;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, StorageBackend},
    dispatcher::Dispatcher,
    event::{event_from_request, into_http_response},
    storage::{DynamoDbStore, InMemoryStore},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load();

    // Initialize tracing subscriber (JSON lines for CloudWatch)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory=info,inventory_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_current_span(false),
        )
        .init();

    let store = init_store(&config).await;
    let dispatcher = Dispatcher::new(store, config.route_paths());

    tracing::info!(
        target_store = %config.target_display(),
        product_key = %config.product_key,
        "Starting inventory function"
    );

    run(service_fn(|request: Request| {
        let dispatcher = dispatcher.clone();
        async move { handle(&dispatcher, request).await }
    }))
    .await
}

/// Build the configured store backend.
async fn init_store(config: &Config) -> Arc<dyn ItemStore> {
    match config.storage {
        StorageBackend::Dynamodb => {
            let store = DynamoDbStore::connect(
                &config.region,
                config.endpoint_url.as_deref(),
                config.table_name.clone(),
                config.product_key.clone(),
            )
            .await;
            tracing::debug!(table = store.table_name(), "DynamoDB store ready");
            Arc::new(store)
        }
        StorageBackend::Memory => Arc::new(InMemoryStore::new(
            config.product_key.clone(),
            config.memory_page_size,
        )),
    }
}

/// Lambda entry point for one HTTP event.
async fn handle(dispatcher: &Dispatcher, request: Request) -> Result<Response<Body>, Error> {
    let response = dispatcher.dispatch(event_from_request(request)).await;
    into_http_response(response)
}
