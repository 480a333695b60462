//! Response normalization.
//!
//! The backend wraps payloads inconsistently: `{ "data": [...] }`,
//! `{ "data": { "data": [...], "total": 12 } }`, bare arrays and bare objects
//! all occur, sometimes on the same resource. Everything read from the API
//! passes through this module so that callers only ever see the payload.
//!
//! A value is treated as an envelope when it is an object with a `data` key and
//! no `id` key; envelopes are peeled repeatedly.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// A decoded list plus the server-side total when one was reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// The reported total, or the number of decoded items when none was sent.
    pub fn total_or_len(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}

fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("data") && !obj.contains_key("id"))
}

fn read_total(value: &Value) -> Option<u64> {
    let obj = value.as_object()?;
    obj.get("meta")
        .and_then(|meta| meta.get("total"))
        .or_else(|| obj.get("total"))
        .and_then(|total| match total {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
}

/// Strips every envelope layer and returns the innermost payload.
pub fn unwrap_envelope(mut value: Value) -> Value {
    while is_envelope(&value) {
        value = unwrap_envelope_once(value);
    }
    value
}

/// Decodes a single record from any supported shape.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    let payload = unwrap_envelope(value);
    serde_json::from_value(payload).map_err(AppError::decode)
}

/// Decodes a list from any supported shape, keeping the outermost total seen.
pub fn decode_list<T: DeserializeOwned>(mut value: Value) -> Result<Page<T>, AppError> {
    let mut total = None;

    while is_envelope(&value) {
        total = total.or_else(|| read_total(&value));
        value = unwrap_envelope_once(value);
    }

    match value {
        Value::Array(_) => {
            let items: Vec<T> = serde_json::from_value(value).map_err(AppError::decode)?;
            Ok(Page { items, total })
        }
        Value::Null => Ok(Page {
            items: Vec::new(),
            total,
        }),
        other => Err(AppError::decode(anyhow::anyhow!(
            "expected a list in response, found {}",
            kind_name(&other)
        ))),
    }
}

fn unwrap_envelope_once(value: Value) -> Value {
    match value {
        Value::Object(mut obj) => obj.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
        title: String,
    }

    #[test]
    fn test_unwrap_envelope_strips_every_layer() {
        let value = json!({ "data": { "data": { "data": { "id": 3, "title": "c" } } } });
        assert_eq!(unwrap_envelope(value), json!({ "id": 3, "title": "c" }));
        assert_eq!(unwrap_envelope(json!({ "data": null })), Value::Null);
    }

    #[test]
    fn test_list_shapes_decode_identically() {
        let bare = json!([{ "id": 1, "title": "a" }]);
        let wrapped = json!({ "data": [{ "id": 1, "title": "a" }] });
        let double = json!({ "data": { "data": [{ "id": 1, "title": "a" }] } });

        let expected = vec![Item {
            id: 1,
            title: "a".into(),
        }];
        assert_eq!(decode_list::<Item>(bare).unwrap().items, expected);
        assert_eq!(decode_list::<Item>(wrapped).unwrap().items, expected);
        assert_eq!(decode_list::<Item>(double).unwrap().items, expected);
    }

    #[test]
    fn test_single_record_with_data_field_is_not_unwrapped() {
        #[derive(Debug, Deserialize)]
        struct WithData {
            id: i64,
            data: String,
        }

        let record: WithData = decode(json!({ "id": 7, "data": "x" })).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.data, "x");
    }

    #[test]
    fn test_single_record_shapes() {
        let item: Item = decode(json!({ "data": { "id": 99, "title": "t" } })).unwrap();
        assert_eq!(item.id, 99);

        let item: Item = decode(json!({ "id": 99, "title": "t" })).unwrap();
        assert_eq!(item.title, "t");
    }

    #[test]
    fn test_totals_from_meta_or_inline() {
        let page = decode_list::<Item>(json!({ "data": [], "meta": { "total": 40 } })).unwrap();
        assert_eq!(page.total, Some(40));

        let page =
            decode_list::<Item>(json!({ "data": { "data": [], "total": "12" } })).unwrap();
        assert_eq!(page.total, Some(12));

        let page = decode_list::<Item>(json!([{ "id": 1, "title": "a" }])).unwrap();
        assert_eq!(page.total, None);
        assert_eq!(page.total_or_len(), 1);
    }

    #[test]
    fn test_null_data_is_empty_list() {
        let page = decode_list::<Item>(json!({ "data": null })).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_object_where_list_expected_is_decode_error() {
        let err = decode_list::<Item>(json!({ "id": 1, "title": "a" })).unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Decode);
    }
}
