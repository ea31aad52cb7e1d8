//! Value differ: top-level dispatch between the object, array, and scalar
//! strategies.

pub mod array;
pub mod object;

use serde_json::{Value, json};

use crate::options::{ArrayDiffMode, Options};
use crate::path::Path;
use crate::value::{coerce_null, deep_eq};

/// Computes the delta that transforms `left` into `right`, or `None` if they
/// are already deeply equal.
pub fn diff(left: &Value, right: &Value, options: &Options) -> Option<Value> {
    tracing::debug!("computing diff");
    diff_recursive(left, right, options, &Path::default())
}

pub(crate) fn diff_recursive(
    left: &Value,
    right: &Value,
    options: &Options,
    path: &Path,
) -> Option<Value> {
    let left = coerce_null(left);
    let right = coerce_null(right);

    match (&left, &right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            object::diff(left_map, right_map, options, path)
        }
        (Value::Array(left_arr), Value::Array(right_arr)) => match options.array_diff_mode {
            ArrayDiffMode::Efficient => array::diff(left_arr, right_arr, options, path),
            ArrayDiffMode::Simple => {
                if deep_eq(&left, &right) {
                    None
                } else {
                    Some(json!([left, right]))
                }
            }
        },
        _ => {
            if deep_eq(&left, &right) {
                None
            } else {
                Some(json!([left, right]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use serde_json::json;

    #[test]
    fn identical_values_produce_no_delta() {
        check!(diff(&json!(1), &json!(1), &Options::default()) == None);
    }

    #[test]
    fn scalar_replace() {
        let delta = diff(&json!(1), &json!("hello"), &Options::default());
        check!(delta == Some(json!([1, "hello"])));
    }

    #[test]
    fn null_is_coerced_to_empty_string_scalar() {
        let delta = diff(&Value::Null, &json!({}), &Options::default());
        check!(delta == Some(json!(["", {}])));
    }

    #[test]
    fn simple_array_mode_replaces_the_whole_array() {
        let left = json!([1, 2, 3]);
        let right = json!([3, 2, 1]);

        let options = Options::new().with_array_diff_mode(ArrayDiffMode::Simple);
        let delta = diff(&left, &right, &options);

        check!(delta == Some(json!([[1, 2, 3], [3, 2, 1]])));
    }
}
