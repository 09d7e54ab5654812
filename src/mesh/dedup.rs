//! Order-preserving grouping of coordinate pairs.
//!
//! Node identity assignment requires grouping the flattened corner stream
//! by *exact* coordinate equality while preserving first-occurrence order:
//! group `k` is the `k`-th distinct pair encountered, never a
//! lexicographically sorted position. Exact equality is sound because every
//! corner value is computed through one canonical operand sequence, so
//! cells sharing a corner hold bit-identical coordinates; no tolerance
//! matching is performed.

use std::collections::HashMap;

/// Result of grouping a coordinate-pair stream by exact value.
#[derive(Clone, Debug, PartialEq)]
pub struct PairGroups {
    /// Unique pairs, in order of first appearance.
    pub unique: Vec<[f64; 2]>,
    /// For each input pair, the 0-based id of its group.
    pub group_ids: Vec<usize>,
}

/// Exact-equality key for a coordinate pair.
///
/// Keyed on the IEEE-754 bit patterns; `-0.0` is folded onto `+0.0` so the
/// two zeros (which compare equal as values) land in one group.
#[inline]
fn pair_key(pair: [f64; 2]) -> (u64, u64) {
    let normalize = |v: f64| if v == 0.0 { 0.0f64 } else { v };
    (normalize(pair[0]).to_bits(), normalize(pair[1]).to_bits())
}

/// Group a stream of `[lon, lat]` pairs by exact value, assigning ids in
/// first-occurrence order.
pub fn group_pairs(pairs: impl Iterator<Item = [f64; 2]>) -> PairGroups {
    let (lower, _) = pairs.size_hint();
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(lower);
    let mut unique = Vec::new();
    let mut group_ids = Vec::with_capacity(lower);

    for pair in pairs {
        let next_id = unique.len();
        let id = *seen.entry(pair_key(pair)).or_insert_with(|| {
            unique.push(pair);
            next_id
        });
        group_ids.push(id);
    }

    PairGroups { unique, group_ids }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        // Ids follow appearance order, not sorted order.
        let pairs = [[3.0, 3.0], [1.0, 1.0], [3.0, 3.0], [2.0, 2.0]];
        let groups = group_pairs(pairs.into_iter());

        assert_eq!(groups.unique, vec![[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(groups.group_ids, vec![0, 1, 0, 2]);
    }

    #[test]
    fn test_exact_equality_only() {
        // Nearly-equal values stay distinct; no tolerance matching.
        let a: f64 = 0.1 + 0.2;
        let b: f64 = 0.3;
        assert_ne!(a.to_bits(), b.to_bits());

        let groups = group_pairs([[a, 0.0], [b, 0.0]].into_iter());
        assert_eq!(groups.unique.len(), 2);
    }

    #[test]
    fn test_negative_zero_folds_to_zero() {
        let groups = group_pairs([[0.0, 1.0], [-0.0, 1.0]].into_iter());
        assert_eq!(groups.unique.len(), 1);
        assert_eq!(groups.group_ids, vec![0, 0]);
    }

    #[test]
    fn test_empty_stream() {
        let groups = group_pairs(std::iter::empty());
        assert!(groups.unique.is_empty());
        assert!(groups.group_ids.is_empty());
    }
}
