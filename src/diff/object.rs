//! Object differ: property-wise recursion, emitting add/delete/replace
//! encodings and honoring `excludePaths` and the ignore-missing/ignore-new
//! behavior flags.

use serde_json::{Map, Value, json};

use crate::options::Options;
use crate::path::Path;

use super::diff_recursive;

pub fn diff(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    options: &Options,
    path: &Path,
) -> Option<Value> {
    let mut delta = Map::new();

    for (key, left_value) in left {
        let child_path = path.push(key.clone());
        if options.is_excluded(&child_path) {
            continue;
        }

        match right.get(key) {
            Some(right_value) => {
                if let Some(nested) = diff_recursive(left_value, right_value, options, &child_path) {
                    delta.insert(key.clone(), nested);
                }
            }
            None => {
                if !options.diff_behaviors.ignore_missing_properties {
                    delta.insert(key.clone(), json!([left_value, 0, 0]));
                }
            }
        }
    }

    for (key, right_value) in right {
        if left.contains_key(key) {
            continue;
        }
        let child_path = path.push(key.clone());
        if options.is_excluded(&child_path) {
            continue;
        }
        if !options.diff_behaviors.ignore_new_properties {
            delta.insert(key.clone(), json!([right_value]));
        }
    }

    if delta.is_empty() { None } else { Some(Value::Object(delta)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff as top_level_diff;
    use crate::options::DiffBehaviors;
    use assert2::check;
    use serde_json::json;

    #[test]
    fn empty_objects_have_no_diff() {
        check!(top_level_diff(&json!({}), &json!({}), &Options::default()) == None);
    }

    #[test]
    fn replaced_property() {
        let delta = top_level_diff(&json!({"p": true}), &json!({"p": false}), &Options::default());
        check!(delta == Some(json!({"p": [true, false]})));
    }

    #[test]
    fn deleted_property() {
        let delta = top_level_diff(&json!({"p": true}), &json!({}), &Options::default());
        check!(delta == Some(json!({"p": [true, 0, 0]})));
    }

    #[test]
    fn added_property() {
        let delta = top_level_diff(&json!({}), &json!({"p": true}), &Options::default());
        check!(delta == Some(json!({"p": [true]})));
    }

    #[test]
    fn excluded_paths_do_not_appear_in_the_delta() {
        let left = json!({"id": "a", "nested": {"id": "b", "name": "x"}, "name": "y"});
        let right = json!({"id": "z", "nested": {"id": "w", "name": "x2"}, "name": "y2"});

        let options = Options::new().with_exclude_paths(["id", "nested.id"]);
        let delta = top_level_diff(&left, &right, &options).unwrap();

        check!(delta.get("id").is_none());
        check!(delta.get("nested").unwrap().get("id").is_none());
        check!(delta.get("name").is_some());
        check!(delta.get("nested").unwrap().get("name").is_some());
    }

    #[test]
    fn ignore_missing_properties_suppresses_deletions() {
        let left = json!({"a": 1, "b": 2});
        let right = json!({"a": 1});

        let options = Options::new().with_diff_behaviors(DiffBehaviors {
            ignore_missing_properties: true,
            ..Default::default()
        });

        check!(top_level_diff(&left, &right, &options) == None);
    }

    #[test]
    fn ignore_new_properties_suppresses_additions() {
        let left = json!({"a": 1});
        let right = json!({"a": 1, "b": 2});

        let options = Options::new().with_diff_behaviors(DiffBehaviors {
            ignore_new_properties: true,
            ..Default::default()
        });

        check!(top_level_diff(&left, &right, &options) == None);
    }
}
