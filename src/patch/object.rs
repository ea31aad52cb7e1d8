use serde_json::{Map, Value, json};

use crate::error::DeltaError;

/// Applies an object-shaped delta (no `_t` marker) to `left`.
pub(super) fn patch(left: &Value, delta: &Map<String, Value>) -> Result<Value, DeltaError> {
    let mut result = match left {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (key, value) in delta {
        if is_delete_encoding(value) {
            result.remove(key);
            continue;
        }

        match result.get(key) {
            Some(existing) => {
                let patched = super::patch(existing, value)?;
                result.insert(key.clone(), patched);
            }
            None => {
                let added = super::patch(&Value::Null, value)?;
                result.insert(key.clone(), added);
            }
        }
    }

    Ok(Value::Object(result))
}

fn is_delete_encoding(value: &Value) -> bool {
    matches!(value, Value::Array(a) if a.len() == 3 && a[2] == json!(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn missing_property_is_added_via_patch_of_null() {
        let mut delta = Map::new();
        delta.insert("a".to_string(), json!([{"x": 1}]));

        let result = patch(&json!({}), &delta).unwrap();
        check!(result == json!({"a": {"x": 1}}));
    }

    #[test]
    fn delete_encoding_removes_the_property() {
        let mut delta = Map::new();
        delta.insert("a".to_string(), json!([1, 0, 0]));

        let result = patch(&json!({"a": 1, "b": 2}), &delta).unwrap();
        check!(result == json!({"b": 2}));
    }
}
