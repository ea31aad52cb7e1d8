//! The array delta engine's core: longest common subsequence over deep
//! equality, with classification of the leftover indices into additions,
//! removals, moves, and in-place edits.
//!
//! Classical dynamic-programming LCS, iterative backtrack (no recursion over
//! sequence length, so documents with deeply nested or very long arrays
//! don't blow the stack), and a documented tie-break that makes the output
//! deterministic and test-stable.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::value::deep_eq;

/// Classification of two JSON sequences under deep equality.
///
/// All indices are rebased by the caller's `head_offset`, so they refer to
/// positions in the original (untrimmed) arrays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArrayDiff {
    /// `(left_index, right_index)` pairs common to both sequences, in
    /// ascending order.
    pub lcs: Vec<(usize, usize)>,
    /// Left indices with no counterpart in `right` — sorted ascending.
    pub to_remove: Vec<usize>,
    /// Right indices with no counterpart in `left` — sorted ascending.
    pub to_add: Vec<usize>,
    /// `(left_index, right_index)` pairs that are deeply-equal leftovers and
    /// should be relocated rather than removed + re-added.
    pub to_move: Vec<(usize, usize)>,
    /// `(left_index, right_index)` pairs of leftovers paired 1:1 by
    /// ascending index, to be diffed in place.
    pub to_diff: Vec<(usize, usize)>,
}

/// Computes the LCS-based classification of `left` against `right`.
///
/// `head_offset` is the number of elements the array differ already trimmed
/// from the front of both arrays; every index this function emits has
/// `head_offset` added back so it refers to the original, untrimmed arrays.
pub fn diff(left: &[Value], right: &[Value], head_offset: usize) -> ArrayDiff {
    let m = left.len();
    let n = right.len();

    if m == 0 && n == 0 {
        return ArrayDiff::default();
    }
    if m == 0 {
        return ArrayDiff {
            to_add: (0..n).map(|j| j + head_offset).collect(),
            ..Default::default()
        };
    }
    if n == 0 {
        return ArrayDiff {
            to_remove: (0..m).map(|i| i + head_offset).collect(),
            ..Default::default()
        };
    }

    let equal: Vec<Vec<bool>> = left
        .iter()
        .map(|l| right.iter().map(|r| deep_eq(l, r)).collect())
        .collect();

    // M[p][q] = LCS length of left[0..p), right[0..q)
    let mut table = vec![vec![0u32; n + 1]; m + 1];
    for i in 0..m {
        for j in 0..n {
            table[i + 1][j + 1] = if equal[i][j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }

    let mut lcs_rev = Vec::new();
    let mut left_leftover = BTreeSet::new();
    let mut right_leftover = BTreeSet::new();

    let mut p = m;
    let mut q = n;
    while p > 0 && q > 0 {
        if equal[p - 1][q - 1] {
            lcs_rev.push((p - 1, q - 1));
            p -= 1;
            q -= 1;
        } else if table[p - 1][q] > table[p][q - 1] {
            left_leftover.insert(p - 1);
            p -= 1;
        } else {
            // Ties favor discarding the right index.
            right_leftover.insert(q - 1);
            q -= 1;
        }
    }
    while p > 0 {
        p -= 1;
        left_leftover.insert(p);
    }
    while q > 0 {
        q -= 1;
        right_leftover.insert(q);
    }

    let lcs: Vec<(usize, usize)> = lcs_rev.into_iter().rev().collect();

    let mut to_move = Vec::new();
    for i in left_leftover.clone().into_iter() {
        if let Some(&j) = right_leftover.iter().find(|&&j| equal[i][j]) {
            left_leftover.remove(&i);
            right_leftover.remove(&j);
            to_move.push((i, j));
        }
    }

    let mut to_diff = Vec::new();
    let remaining_left: Vec<usize> = left_leftover.into_iter().collect();
    let remaining_right: Vec<usize> = right_leftover.into_iter().collect();
    let zipped = remaining_left.len().min(remaining_right.len());
    for k in 0..zipped {
        to_diff.push((remaining_left[k], remaining_right[k]));
    }

    let to_remove: Vec<usize> = remaining_left[zipped..].iter().copied().collect();
    let to_add: Vec<usize> = remaining_right[zipped..].iter().copied().collect();

    ArrayDiff {
        lcs: lcs.into_iter().map(|(i, j)| (i + head_offset, j + head_offset)).collect(),
        to_remove: to_remove.into_iter().map(|i| i + head_offset).collect(),
        to_add: to_add.into_iter().map(|j| j + head_offset).collect(),
        to_move: to_move
            .into_iter()
            .map(|(i, j)| (i + head_offset, j + head_offset))
            .collect(),
        to_diff: to_diff
            .into_iter()
            .map(|(i, j)| (i + head_offset, j + head_offset))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use serde_json::json;

    fn values(nums: &[i64]) -> Vec<Value> {
        nums.iter().map(|n| json!(n)).collect()
    }

    #[test]
    fn favors_last_of_each_run_on_the_left() {
        let left = values(&[1, 1, 2, 3, 4, 1, 1]);
        let right = values(&[1, 2, 3, 1]);

        let result = diff(&left, &right, 0);

        check!(result.lcs == vec![(1, 0), (2, 1), (3, 2), (6, 3)]);
    }

    #[test]
    fn detects_a_full_reversal_as_moves() {
        let left = values(&[1, 2, 3, 4]);
        let right = values(&[4, 3, 2, 1]);

        let result = diff(&left, &right, 0);

        check!(result.lcs == vec![(3, 0)]);
        check!(result.to_move == vec![(0, 3), (1, 2), (2, 1)]);
        check!(result.to_remove.is_empty());
        check!(result.to_add.is_empty());
        check!(result.to_diff.is_empty());
    }

    #[test]
    fn head_offset_rebases_every_emitted_index() {
        let left = values(&[1, 2]);
        let right = values(&[9, 2]);

        let result = diff(&left, &right, 5);

        check!(result.lcs == vec![(6, 6)]);
        check!(result.to_remove == vec![5]);
        check!(result.to_add == vec![5]);
    }

    #[test]
    fn empty_left_is_all_additions() {
        let left: Vec<Value> = vec![];
        let right = values(&[1, 2, 3]);

        let result = diff(&left, &right, 0);

        check!(result.to_add == vec![0, 1, 2]);
        check!(result.to_remove.is_empty());
    }

    #[test]
    fn empty_right_is_all_removals() {
        let left = values(&[1, 2, 3]);
        let right: Vec<Value> = vec![];

        let result = diff(&left, &right, 0);

        check!(result.to_remove == vec![0, 1, 2]);
        check!(result.to_add.is_empty());
    }
}
