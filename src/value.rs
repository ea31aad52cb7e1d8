//! The JSON value model and its deep-equality predicate.
//!
//! `spatch` does not define its own tree type: `serde_json::Value` already is
//! the closed, tagged variant (Null/Bool/Number/String/Array/Object) the
//! format requires, and its `PartialEq` impl already performs the structural,
//! order-independent-on-objects comparison this crate needs. `deep_eq` exists
//! so the rest of the crate has one named place to call "equal", rather than
//! sprinkling `==` through the differs and leaving a reader to wonder whether
//! two different equality notions are in play.

use serde_json::Value;

/// Canonical deep-equality predicate used throughout the diff/patch engine.
///
/// Scalars compare by value, arrays compare element-wise in order, and
/// objects compare by equal key set and equal value per key, irrespective of
/// key order — exactly the semantics `serde_json::Value`'s own `PartialEq`
/// already provides.
pub fn deep_eq(left: &Value, right: &Value) -> bool {
    left == right
}

/// The empty-string scalar used as the identity value during dispatch.
///
/// The original jsondiffpatch behavior coerces `null` to `""` before
/// comparing left/right types, which leaks into the wire format (e.g.
/// `diff(null, {})` produces `["", {}]`). This crate replicates that
/// coercion exactly for wire compatibility.
pub fn coerce_null(value: &Value) -> Value {
    if value.is_null() {
        Value::String(String::new())
    } else {
        value.clone()
    }
}

/// True for the identity delta: `null` or the empty-string scalar.
pub fn is_identity_delta(value: &Value) -> bool {
    value.is_null() || matches!(value, Value::String(s) if s.is_empty())
}
