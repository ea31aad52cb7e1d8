//! Array differ: head/tail trimming plus the LCS engine, assembled into a
//! jsondiffpatch array delta (`{"_t": "a", ...}`).

use serde_json::{Map, Value, json};

use crate::lcs;
use crate::options::Options;
use crate::path::Path;
use crate::value::deep_eq;

use super::diff_recursive;

/// A nested delta that happens to be the identity is represented as `""`
/// rather than omitted, since move/edit encodings always carry a (possibly
/// empty) nested delta slot.
fn nested_or_identity(nested: Option<Value>) -> Value {
    nested.unwrap_or_else(|| Value::String(String::new()))
}

pub fn diff(left: &[Value], right: &[Value], options: &Options, path: &Path) -> Option<Value> {
    if left == right {
        return None;
    }

    let min_len = left.len().min(right.len());

    let mut head = 0;
    while head < min_len && deep_eq(&left[head], &right[head]) {
        head += 1;
    }

    let max_tail = min_len - head;
    let mut tail = 0;
    while tail < max_tail && deep_eq(&left[left.len() - 1 - tail], &right[right.len() - 1 - tail]) {
        tail += 1;
    }

    let left_mid = &left[head..left.len() - tail];
    let right_mid = &right[head..right.len() - tail];

    let classified = lcs::diff(left_mid, right_mid, head);

    let mut delta = Map::new();
    delta.insert("_t".to_string(), json!("a"));

    for (li, ri) in classified.to_diff.iter().chain(classified.to_move.iter()) {
        let (li, ri) = (*li, *ri);
        let nested = nested_or_identity(diff_recursive(&left[li], &right[ri], options, path));
        if li == ri {
            delta.insert(ri.to_string(), nested);
        } else {
            delta.insert(format!("_{li}"), json!([nested, ri, 3]));
        }
    }

    for ri in classified.to_add {
        delta.insert(ri.to_string(), json!([right[ri]]));
    }

    for li in classified.to_remove {
        delta.insert(format!("_{li}"), json!([left[li], 0, 0]));
    }

    Some(Value::Object(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff as top_level_diff;
    use crate::patch::patch;
    use crate::unpatch::unpatch;
    use assert2::check;
    use serde_json::json;

    #[test]
    fn removal_of_head_element() {
        let left = json!([1, 2, 3, 4]);
        let right = json!([2, 3, 4]);

        let delta = top_level_diff(&left, &right, &Options::default()).unwrap();

        check!(delta == json!({"_t": "a", "_0": [1, 0, 0]}));
    }

    #[test]
    fn additions_at_both_ends() {
        let left = json!([1, 2, 3, 4]);
        let right = json!([0, 1, 2, 3, 4, 5]);

        let delta = top_level_diff(&left, &right, &Options::default()).unwrap();

        check!(delta == json!({"_t": "a", "0": [0], "5": [5]}));
    }

    #[test]
    fn nested_object_modification() {
        let left = json!([1, 2, {"p": false}, 4]);
        let right = json!([1, 2, {"p": true}, 4]);

        let delta = top_level_diff(&left, &right, &Options::default()).unwrap();

        check!(delta == json!({"_t": "a", "2": {"p": [false, true]}}));
    }

    #[test]
    fn mixed_add_remove_move_edit_round_trips() {
        let left = json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let right = json!([10, 0, 1, 7, 2, 4, 5, 6, 88, 9, 3]);

        let delta = top_level_diff(&left, &right, &Options::default()).unwrap();

        let patched = patch(&left, &delta).unwrap();
        check!(patched == right);

        let unpatched = unpatch(&right, &delta).unwrap();
        check!(unpatched == left);
    }
}
