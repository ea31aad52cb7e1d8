use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::DeltaError;

enum Entry {
    Remove { index: usize, value: Value },
    Move { from: usize, to: usize, nested: Value },
    Modify { index: usize, nested: Value },
    Add { index: usize },
}

fn parse_entries(delta: &Map<String, Value>) -> Result<Vec<Entry>, DeltaError> {
    let mut entries = Vec::new();

    for (key, value) in delta {
        if key == "_t" {
            continue;
        }

        if let Some(left_index) = key.strip_prefix('_') {
            let li: usize = left_index
                .parse()
                .map_err(|_| DeltaError::invalid(format!("invalid left-side index '{key}'")))?;
            let entry = value
                .as_array()
                .filter(|a| a.len() == 3)
                .ok_or_else(|| DeltaError::invalid(format!("array delta entry '{key}' must be a 3-element array")))?;

            match entry[2].as_i64() {
                Some(0) => entries.push(Entry::Remove {
                    index: li,
                    value: entry[0].clone(),
                }),
                Some(3) => {
                    let new_idx = entry[1]
                        .as_u64()
                        .ok_or_else(|| DeltaError::invalid(format!("move target in '{key}' must be a non-negative integer")))?
                        as usize;
                    entries.push(Entry::Move {
                        from: li,
                        to: new_idx,
                        nested: entry[0].clone(),
                    });
                }
                Some(2) => return Err(DeltaError::UnsupportedOperation),
                _ => {
                    return Err(DeltaError::invalid(format!(
                        "array delta entry '{key}' has an unrecognized operation code"
                    )));
                }
            }
        } else {
            let ri: usize = key
                .parse()
                .map_err(|_| DeltaError::invalid(format!("invalid right-side index '{key}'")))?;

            match value.as_array() {
                Some(a) if a.len() == 1 => entries.push(Entry::Add { index: ri }),
                _ => entries.push(Entry::Modify {
                    index: ri,
                    nested: value.clone(),
                }),
            }
        }
    }

    Ok(entries)
}

/// Reverses an array-shaped delta (`_t: "a"`) against `right`, the mirror
/// image of [`crate::patch::array`]: indices not touched by any entry are the
/// longest-common-subsequence pairs, resolved directly by position (ascending
/// untouched right index against ascending untouched left index) rather than
/// by splicing `right` and hoping later lookups still land on the right
/// element.
pub(super) fn unpatch(right: &[Value], delta: &Map<String, Value>) -> Result<Value, DeltaError> {
    let entries = parse_entries(delta)?;

    let mut covered_left: BTreeSet<usize> = BTreeSet::new();
    let mut consumed_right: BTreeSet<usize> = BTreeSet::new();
    let mut remove_count: i64 = 0;
    let mut add_count: i64 = 0;

    for entry in &entries {
        match entry {
            Entry::Remove { index, .. } => {
                covered_left.insert(*index);
                remove_count += 1;
            }
            Entry::Move { from, to, .. } => {
                covered_left.insert(*from);
                consumed_right.insert(*to);
            }
            Entry::Modify { index, .. } => {
                covered_left.insert(*index);
                consumed_right.insert(*index);
            }
            Entry::Add { index } => {
                consumed_right.insert(*index);
                add_count += 1;
            }
        }
    }

    let left_len = right.len() as i64 + remove_count - add_count;
    let left_len = usize::try_from(left_len)
        .map_err(|_| DeltaError::invalid("array delta adds more elements than the target array has"))?;

    let remaining_right: Vec<usize> = (0..right.len()).filter(|i| !consumed_right.contains(i)).collect();
    let remaining_left: Vec<usize> = (0..left_len).filter(|i| !covered_left.contains(i)).collect();

    if remaining_left.len() != remaining_right.len() {
        return Err(DeltaError::invalid(
            "array delta is inconsistent: unmatched element count does not align",
        ));
    }

    let mut result: Vec<Option<Value>> = vec![None; left_len];

    for (li, ri) in remaining_left.into_iter().zip(remaining_right) {
        result[li] = Some(right[ri].clone());
    }

    for entry in entries {
        match entry {
            Entry::Add { .. } => {}
            Entry::Remove { index, value } => {
                let slot = result
                    .get_mut(index)
                    .ok_or_else(|| DeltaError::invalid(format!("remove target index {index} out of range")))?;
                *slot = Some(value);
            }
            Entry::Move { from, to, nested } => {
                let moved_value = right
                    .get(to)
                    .ok_or_else(|| DeltaError::invalid(format!("move target index {to} out of range")))?;
                let slot = result
                    .get_mut(from)
                    .ok_or_else(|| DeltaError::invalid(format!("move source index {from} out of range")))?;
                *slot = Some(super::unpatch(moved_value, &nested)?);
            }
            Entry::Modify { index, nested } => {
                let existing = right
                    .get(index)
                    .ok_or_else(|| DeltaError::invalid(format!("modify target index {index} out of range")))?;
                let slot = result
                    .get_mut(index)
                    .ok_or_else(|| DeltaError::invalid(format!("modify target index {index} out of range")))?;
                *slot = Some(super::unpatch(existing, &nested)?);
            }
        }
    }

    let result: Vec<Value> = result
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.ok_or_else(|| DeltaError::invalid(format!("array delta leaves index {i} unresolved"))))
        .collect::<Result<_, _>>()?;

    Ok(Value::Array(result))
}
