use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::DeltaError;

enum Entry {
    Remove(usize),
    Move { from: usize, to: usize, nested: Value },
    Modify { index: usize, nested: Value },
    Add { index: usize, value: Value },
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
                Some(0) => entries.push(Entry::Remove(li)),
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
                Some(a) if a.len() == 1 => entries.push(Entry::Add {
                    index: ri,
                    value: a[0].clone(),
                }),
                _ => entries.push(Entry::Modify {
                    index: ri,
                    nested: value.clone(),
                }),
            }
        }
    }

    Ok(entries)
}

/// Applies an array-shaped delta (`_t: "a"`) to `left`.
///
/// Every emitted delta key already carries the index it targets in the final
/// array — a left index for removals/move-sources, a right index for
/// additions/modifies/move-targets. Rather than splice `left` with
/// `Vec::remove`/`insert` (which shifts positions out from under any entry
/// addressed by an index computed before the splice), this resolves every
/// target position directly: elements untouched by the delta are the
/// longest-common-subsequence pairs, and since LCS pairs are order-preserving
/// in both arrays, the k-th smallest untouched left index always maps to the
/// k-th smallest untouched right index.
pub(super) fn patch(left: &[Value], delta: &Map<String, Value>) -> Result<Value, DeltaError> {
    let entries = parse_entries(delta)?;

    let mut consumed_left: BTreeSet<usize> = BTreeSet::new();
    let mut covered_right: BTreeSet<usize> = BTreeSet::new();
    let mut remove_count: i64 = 0;
    let mut add_count: i64 = 0;

    for entry in &entries {
        match entry {
            Entry::Remove(li) => {
                consumed_left.insert(*li);
                remove_count += 1;
            }
            Entry::Move { from, to, .. } => {
                consumed_left.insert(*from);
                covered_right.insert(*to);
            }
            Entry::Modify { index, .. } => {
                consumed_left.insert(*index);
                covered_right.insert(*index);
            }
            Entry::Add { index, .. } => {
                covered_right.insert(*index);
                add_count += 1;
            }
        }
    }

    let right_len = left.len() as i64 - remove_count + add_count;
    let right_len = usize::try_from(right_len)
        .map_err(|_| DeltaError::invalid("array delta removes more elements than the source array has"))?;

    let remaining_left: Vec<usize> = (0..left.len()).filter(|i| !consumed_left.contains(i)).collect();
    let remaining_right: Vec<usize> = (0..right_len).filter(|i| !covered_right.contains(i)).collect();

    if remaining_left.len() != remaining_right.len() {
        return Err(DeltaError::invalid(
            "array delta is inconsistent: unmatched element count does not align",
        ));
    }

    let mut result: Vec<Option<Value>> = vec![None; right_len];

    for (li, ri) in remaining_left.into_iter().zip(remaining_right) {
        result[ri] = Some(left[li].clone());
    }

    for entry in entries {
        match entry {
            Entry::Remove(_) => {}
            Entry::Move { from, to, nested } => {
                let source = left
                    .get(from)
                    .ok_or_else(|| DeltaError::invalid(format!("move source index {from} out of range")))?;
                let slot = result
                    .get_mut(to)
                    .ok_or_else(|| DeltaError::invalid(format!("move target index {to} out of range")))?;
                *slot = Some(super::patch(source, &nested)?);
            }
            Entry::Modify { index, nested } => {
                let existing = left
                    .get(index)
                    .ok_or_else(|| DeltaError::invalid(format!("modify target index {index} out of range")))?;
                let slot = result
                    .get_mut(index)
                    .ok_or_else(|| DeltaError::invalid(format!("modify target index {index} out of range")))?;
                *slot = Some(super::patch(existing, &nested)?);
            }
            Entry::Add { index, value } => {
                let slot = result
                    .get_mut(index)
                    .ok_or_else(|| DeltaError::invalid(format!("add target index {index} out of range")))?;
                *slot = Some(value);
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
