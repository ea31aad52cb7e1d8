//! Patch applier: consumes a delta and a left document, producing the right
//! document it encodes.

mod array;
mod object;

use serde_json::{Value, json};

use crate::error::DeltaError;
use crate::value::is_identity_delta;

/// Applies `delta` to `left`, returning the right-hand document it encodes.
///
/// `left` is never mutated: every branch below clones before changing
/// anything, so a caller's original value is observable, byte-identical,
/// after this call regardless of success or failure.
pub fn patch(left: &Value, delta: &Value) -> Result<Value, DeltaError> {
    tracing::debug!("applying patch");

    if is_identity_delta(delta) {
        return Ok(left.clone());
    }

    match delta {
        Value::Array(arr) => apply_scalar_form(arr),
        Value::Object(map) => match (left.as_array(), map.get("_t")) {
            (Some(elements), Some(Value::String(t))) if t == "a" => array::patch(elements, map),
            _ => object::patch(left, map),
        },
        _ => Err(DeltaError::invalid(
            "delta must be null, the empty string, an array, or an object",
        )),
    }
}

fn apply_scalar_form(arr: &[Value]) -> Result<Value, DeltaError> {
    match arr.len() {
        1 => Ok(arr[0].clone()),
        2 => Ok(arr[1].clone()),
        3 => match arr[2].as_i64() {
            Some(0) => Ok(Value::Null),
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
