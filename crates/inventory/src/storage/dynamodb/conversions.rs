//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and JSON
//! items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use inventory_core::inventory::{ContinuationToken, Item};
use inventory_core::storage::RepositoryError;
use serde_json::{Map, Number, Value};

/// A raw DynamoDB item.
pub type Attributes = HashMap<String, AttributeValue>;

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(item_to_attributes(map)),
    }
}

/// Convert a JSON item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> Attributes {
    item.iter()
        .map(|(name, value)| (name.clone(), json_to_attribute(value)))
        .collect()
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Convert a DynamoDB attribute to a JSON value.
///
/// Sets become arrays and binary values become base64 strings.
pub fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    let value = match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(attributes_to_item(map)?),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Bs(values) => Value::Array(
            values
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            return Err(RepositoryError::Serialization(format!(
                "Unsupported attribute type: {other:?}"
            )))
        }
    };

    Ok(value)
}

/// Convert a DynamoDB item to a JSON item.
pub fn attributes_to_item(attributes: &Attributes) -> Result<Item, RepositoryError> {
    let mut item = Map::new();
    for (name, attribute) in attributes {
        item.insert(name.clone(), attribute_to_json(attribute)?);
    }
    Ok(item)
}

/// Parse a DynamoDB number, keeping integers exact.
fn parse_number(n: &str) -> Result<Number, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {n}")))
}

// ============================================================================
// Keys
// ============================================================================

/// Build the primary key of an item.
pub fn product_key(key_name: &str, product_id: &str) -> Attributes {
    HashMap::from([(
        key_name.to_string(),
        AttributeValue::S(product_id.to_string()),
    )])
}

/// Wrap a `LastEvaluatedKey` as an opaque continuation token.
pub fn key_to_token(key: &Attributes) -> Result<ContinuationToken, RepositoryError> {
    attributes_to_item(key).map(ContinuationToken::new)
}

/// Unwrap a continuation token into an `ExclusiveStartKey`.
pub fn token_to_key(token: &ContinuationToken) -> Attributes {
    item_to_attributes(token.as_item())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn sample_item() -> Item {
        json!({
            "productId": "p1",
            "name": "Desk lamp",
            "price": 10,
            "discount": 0.25,
            "inStock": true,
            "supplier": null,
            "tags": ["office", "lighting"],
            "dimensions": {"height": 45, "unit": "cm"}
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();

        let attributes = item_to_attributes(&item);
        let parsed = attributes_to_item(&attributes).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_item_attributes_have_expected_types() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(attributes.get("productId").unwrap().as_s().unwrap(), "p1");
        assert_eq!(attributes.get("price").unwrap().as_n().unwrap(), "10");
        assert_eq!(attributes.get("discount").unwrap().as_n().unwrap(), "0.25");
        assert!(*attributes.get("inStock").unwrap().as_bool().unwrap());
        assert!(attributes.get("supplier").unwrap().is_null());
        assert_eq!(attributes.get("tags").unwrap().as_l().unwrap().len(), 2);
        assert!(attributes
            .get("dimensions")
            .unwrap()
            .as_m()
            .unwrap()
            .contains_key("height"));
    }

    #[test]
    fn test_large_unsigned_number_is_exact() {
        let value = attribute_to_json(&AttributeValue::N("18446744073709551615".to_string()))
            .unwrap();

        assert_eq!(value, json!(u64::MAX));
    }

    #[test]
    fn test_exponent_number_parses_as_float() {
        let value = attribute_to_json(&AttributeValue::N("1.5E+2".to_string())).unwrap();

        assert_eq!(value, json!(150.0));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = attribute_to_json(&AttributeValue::N("ten".to_string()));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_sets_become_arrays() {
        let strings = attribute_to_json(&AttributeValue::Ss(vec![
            "a".to_string(),
            "b".to_string(),
        ]))
        .unwrap();
        let numbers =
            attribute_to_json(&AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]))
                .unwrap();

        assert_eq!(strings, json!(["a", "b"]));
        assert_eq!(numbers, json!([1, 2.5]));
    }

    #[test]
    fn test_binary_becomes_base64() {
        let value = attribute_to_json(&AttributeValue::B(Blob::new(b"hi".to_vec()))).unwrap();

        assert_eq!(value, json!("aGk="));
    }

    #[test]
    fn test_product_key() {
        let key = product_key("productId", "p1");

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("productId").unwrap().as_s().unwrap(), "p1");
    }

    #[test]
    fn test_continuation_token_round_trip() {
        let key = product_key("productId", "p7");

        let token = key_to_token(&key).unwrap();

        assert_eq!(token.as_item()["productId"], json!("p7"));
        assert_eq!(token_to_key(&token), key);
    }
}
