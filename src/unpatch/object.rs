use serde_json::{Map, Value};

use crate::error::DeltaError;

/// Reverses an object-shaped delta (no `_t` marker) against `right`.
pub(super) fn unpatch(right: &Value, delta: &Map<String, Value>) -> Result<Value, DeltaError> {
    let mut result = match right {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (key, value) in delta {
        if is_add_encoding(value) {
            result.remove(key);
            continue;
        }

        match result.get(key) {
            Some(existing) => {
                let original = super::unpatch(existing, value)?;
                result.insert(key.clone(), original);
            }
            None => {
                let original = super::unpatch(&Value::Null, value)?;
                result.insert(key.clone(), original);
            }
        }
    }

    Ok(Value::Object(result))
}

fn is_add_encoding(value: &Value) -> bool {
    matches!(value, Value::Array(a) if a.len() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use serde_json::json;

    #[test]
    fn add_encoding_is_removed_on_reversal() {
        let mut delta = Map::new();
        delta.insert("a".to_string(), json!([{"x": 1}]));

        let result = unpatch(&json!({"a": {"x": 1}}), &delta).unwrap();
        check!(result == json!({}));
    }

    #[test]
    fn delete_encoding_is_restored_on_reversal() {
        let mut delta = Map::new();
        delta.insert("a".to_string(), json!([1, 0, 0]));

        let result = unpatch(&json!({}), &delta).unwrap();
        check!(result == json!({"a": 1}));
    }
}
