//! Structural JSON diff/patch/unpatch with a jsondiffpatch-compatible delta
//! wire format.
//!
//! The three entry points below are thin, traced wrappers around
//! [`diff::diff`], [`patch::patch`], and [`unpatch::unpatch`]; the
//! string-accepting overloads additionally parse and serialize through
//! `serde_json` for callers that only have JSON text on hand.

pub mod diff;
pub mod error;
pub mod lcs;
pub mod options;
pub mod patch;
pub mod path;
pub mod unpatch;
pub mod value;

pub use diff::diff;
pub use error::DeltaError;
pub use options::{ArrayDiffMode, DiffBehaviors, Options};
pub use patch::patch;
pub use unpatch::unpatch;

use serde_json::Value;

/// Wraps [`DeltaError`] with the JSON-text parsing failures that only the
/// string-accepting overloads below can produce.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error(transparent)]
    Delta(#[from] DeltaError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses `text` as JSON, treating a missing or empty string as the
/// empty-string scalar rather than a parse error.
fn parse_or_empty(text: &str) -> Result<Value, serde_json::Error> {
    if text.is_empty() {
        Ok(Value::String(String::new()))
    } else {
        serde_json::from_str(text)
    }
}

/// String-accepting overload of [`diff`]: parses `left` and `right` as JSON,
/// diffs them, and serializes the resulting delta back to text.
pub fn diff_str(left: &str, right: &str, options: &Options) -> Result<Option<String>, TextError> {
    let left = parse_or_empty(left)?;
    let right = parse_or_empty(right)?;

    diff(&left, &right, options)
        .map(|delta| serde_json::to_string(&delta).map_err(TextError::from))
        .transpose()
}

/// String-accepting overload of [`patch`]: parses `left` and `delta` as
/// JSON, applies the delta, and serializes the result back to text.
pub fn patch_str(left: &str, delta: &str) -> Result<String, TextError> {
    let left = parse_or_empty(left)?;
    let delta = parse_or_empty(delta)?;

    let result = patch(&left, &delta)?;
    Ok(serde_json::to_string(&result)?)
}

/// String-accepting overload of [`unpatch`]: parses `right` and `delta` as
/// JSON, reverses the delta, and serializes the result back to text.
pub fn unpatch_str(right: &str, delta: &str) -> Result<String, TextError> {
    let right = parse_or_empty(right)?;
    let delta = parse_or_empty(delta)?;

    let result = unpatch(&right, &delta)?;
    Ok(serde_json::to_string(&result)?)
}
