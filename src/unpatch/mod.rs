//! Unpatch applier: consumes a delta and a right document, producing the
//! left document it was computed from — the mirror image of [`crate::patch`].

mod array;
mod object;

use serde_json::Value;

use crate::error::DeltaError;
use crate::value::is_identity_delta;

/// Reverses `delta` against `right`, returning the left-hand document it was
/// computed from. Never mutates `right`.
pub fn unpatch(right: &Value, delta: &Value) -> Result<Value, DeltaError> {
    tracing::debug!("applying unpatch");

    if is_identity_delta(delta) {
        return Ok(right.clone());
    }

    match delta {
        Value::Array(arr) => apply_scalar_form(arr),
        Value::Object(map) => match (right.as_array(), map.get("_t")) {
            (Some(elements), Some(Value::String(t))) if t == "a" => array::unpatch(elements, map),
            _ => object::unpatch(right, map),
        },
        _ => Err(DeltaError::invalid(
            "delta must be null, the empty string, an array, or an object",
        )),
    }
}

fn apply_scalar_form(arr: &[Value]) -> Result<Value, DeltaError> {
    match arr.len() {
        1 => Ok(Value::Null),
        2 => Ok(arr[0].clone()),
        3 => match arr[2].as_i64() {
            Some(0) => Ok(arr[0].clone()),
            Some(2) => Err(DeltaError::UnsupportedOperation),
            _ => Err(DeltaError::invalid(
                "3-element delta must use operation code 0 (delete) or 2 (text diff)",
            )),
        },
        _ => Err(DeltaError::invalid(format!(
            "scalar-form delta array must have 1 to 3 elements, found {}",
            arr.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use serde_json::json;

    #[test]
    fn identity_deltas_return_right_unchanged() {
        let right = json!({"a": 1});
        check!(unpatch(&right, &Value::Null).unwrap() == right);
        check!(unpatch(&right, &json!("")).unwrap() == right);
    }

    #[test]
    fn scalar_add_replace_delete_reverse() {
        check!(unpatch(&json!("hello"), &json!(["hello"])).unwrap() == json!(null));
        check!(unpatch(&json!("hello"), &json!([1, "hello"])).unwrap() == json!(1));
        check!(unpatch(&json!(null), &json!([1, 0, 0])).unwrap() == json!(1));
    }

    #[test]
    fn text_diff_operation_code_is_rejected() {
        let err = unpatch(&json!("y"), &json!(["x", "y", 2])).unwrap_err();
        check!(err == DeltaError::UnsupportedOperation);
    }

    #[test]
    fn object_with_a_field_literally_named_t_is_not_mistaken_for_an_array_delta() {
        let right = json!({"_t": 2});
        let delta = json!({"_t": [1, 2]});

        check!(unpatch(&right, &delta).unwrap() == json!({"_t": 1}));
    }

    #[test]
    fn object_roundtrip_with_patch() {
        let left = json!({"p": true});
        let right = json!({"p": false});
        let delta = json!({"p": [true, false]});

        check!(crate::patch::patch(&left, &delta).unwrap() == right);
        check!(unpatch(&right, &delta).unwrap() == left);
    }
}
