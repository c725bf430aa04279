//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between JSON values and DynamoDB
//! AttributeValue maps. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use super::error::{DynamodbError, Result};

/// Convert a JSON object into a DynamoDB item.
///
/// The top-level value must be a JSON object; each member becomes one
/// attribute.
pub fn json_to_item(value: &Value) -> Result<HashMap<String, AttributeValue>> {
    let object = value
        .as_object()
        .ok_or_else(|| DynamodbError::InvalidItem("expected a JSON object".to_string()))?;

    object
        .iter()
        .map(|(name, member)| Ok((name.clone(), json_to_attribute(member)?)))
        .collect()
}

/// Convert a DynamoDB item back into a JSON object.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Result<Value> {
    let mut object = serde_json::Map::with_capacity(item.len());
    for (name, attribute) in item {
        object.insert(name.clone(), attribute_to_json(attribute)?);
    }
    Ok(Value::Object(object))
}

fn json_to_attribute(value: &Value) -> Result<AttributeValue> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(
            values
                .iter()
                .map(json_to_attribute)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(_) => AttributeValue::M(json_to_item(value)?),
    })
}

fn attribute_to_json(attribute: &AttributeValue) -> Result<Value> {
    Ok(match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => n
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|_| DynamodbError::InvalidItem(format!("invalid number: {}", n)))?,
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        AttributeValue::M(item) => item_to_json(item)?,
        other => {
            return Err(DynamodbError::InvalidItem(format!(
                "unsupported attribute type: {:?}",
                other
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_to_item() {
        let value = json!({
            "id": "12345",
            "name": "Sample Document",
            "active": true,
            "score": 7.5
        });

        let item = json_to_item(&value).unwrap();
        assert_eq!(item["id"], AttributeValue::S("12345".to_string()));
        assert_eq!(
            item["name"],
            AttributeValue::S("Sample Document".to_string())
        );
        assert_eq!(item["active"], AttributeValue::Bool(true));
        assert_eq!(item["score"], AttributeValue::N("7.5".to_string()));
    }

    #[test]
    fn test_nested_structures_round_trip() {
        let value = json!({
            "id": "12345",
            "tags": ["a", "b"],
            "meta": { "count": 3, "deleted": null }
        });

        let item = json_to_item(&value).unwrap();
        assert_eq!(item_to_json(&item).unwrap(), value);
    }

    #[test]
    fn test_top_level_must_be_an_object() {
        let err = json_to_item(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, DynamodbError::InvalidItem(_)));
    }

    #[test]
    fn test_binary_attribute_is_rejected() {
        let item = HashMap::from([(
            "blob".to_string(),
            AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2, 3])),
        )]);

        let err = item_to_json(&item).unwrap_err();
        assert!(matches!(err, DynamodbError::InvalidItem(_)));
    }
}
