//! DynamoDB store implementation.
//!
//! Implements `ItemStore` from `inventory_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use inventory_core::inventory::{ContinuationToken, Item, Page, UpdateDirective};
use inventory_core::storage::{ItemStore, Result};

use super::conversions::{
    attributes_to_item, item_to_attributes, json_to_attribute, key_to_token, product_key,
    token_to_key,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// Placeholder bound to the updated field name.
const FIELD_NAME_PLACEHOLDER: &str = "#field";
/// Placeholder bound to the updated field value.
const FIELD_VALUE_PLACEHOLDER: &str = ":value";

/// The parts of an UpdateItem request that set a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct SetFieldUpdate {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Builds a single-field `SET` update for a directive.
///
/// Both the field name and its value are passed as expression attributes, so
/// reserved words (`name`, `status`, ...) and names containing expression
/// syntax are stored verbatim.
pub fn set_field_update(directive: &UpdateDirective) -> SetFieldUpdate {
    SetFieldUpdate {
        expression: format!("SET {FIELD_NAME_PLACEHOLDER} = {FIELD_VALUE_PLACEHOLDER}"),
        names: HashMap::from([(
            FIELD_NAME_PLACEHOLDER.to_string(),
            directive.field.clone(),
        )]),
        values: HashMap::from([(
            FIELD_VALUE_PLACEHOLDER.to_string(),
            json_to_attribute(&directive.value),
        )]),
    }
}

/// DynamoDB-based store for the product table.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    key_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client, table and key attribute.
    pub fn new(client: Client, table_name: impl Into<String>, key_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_name: key_name.into(),
        }
    }

    /// Creates a new store for the given region, optionally against a custom endpoint.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn connect(
        region: &str,
        endpoint_url: Option<&str>,
        table_name: impl Into<String>,
        key_name: impl Into<String>,
    ) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));

        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), table_name, key_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn get_item(&self, product_id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(&self.key_name, product_id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan_page(&self, start: Option<ContinuationToken>) -> Result<Page> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start.as_ref().map(token_to_key))
            .send()
            .await
            .map_err(|e| map_scan_error(e, &self.table_name))?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<Result<Vec<_>>>()?;

        let continuation = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(key_to_token(&key)?),
            _ => None,
        };

        tracing::debug!(
            table = %self.table_name,
            count = items.len(),
            has_more = continuation.is_some(),
            "Scanned page"
        );

        Ok(Page {
            items,
            continuation,
        })
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }

    async fn update_item(&self, directive: &UpdateDirective) -> Result<Item> {
        let update = set_field_update(directive);
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(&self.key_name, &directive.product_id)))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, &self.table_name))?;

        match result.attributes {
            Some(attributes) => attributes_to_item(&attributes),
            None => Ok(Item::new()),
        }
    }

    async fn delete_item(&self, product_id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(product_key(&self.key_name, product_id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, &self.table_name))?;

        match result.attributes {
            Some(attributes) => Ok(Some(attributes_to_item(&attributes)?)),
            None => Ok(None),
        }
    }
}
