//! Generic single-pass grouped reduction.
//!
//! This module generalizes the "group then fold" idiom: instead of
//! materializing every group and reducing it afterwards, each item updates an
//! explicit per-key accumulator as it streams past, and accumulators are
//! finalized once at the end. [`crate::average_age_by_city_fold`] is built on
//! top of this.

use std::collections::HashMap;
use std::hash::Hash;

/// Reduces `items` into one finalized value per key in a single pass.
///
/// For each item, `key_fn` selects the group. The first item of a group seeds
/// its accumulator via `seed_fn`; every item of the group (including the
/// first) is folded in via `combine_fn`. Once all items are consumed,
/// `finish_fn` turns each accumulator into the group's result. Groups are
/// never empty: a key only exists because at least one item produced it.
///
/// The input is borrowed and never mutated; calling this twice with the same
/// input yields identical results.
///
/// # Example
///
/// ```
/// use user_stats::group_reduce;
///
/// let words = ["apple", "avocado", "banana"];
/// let counts = group_reduce(
///     &words,
///     |word| word.chars().next(),
///     || 0_u64,
///     |count, _| *count += 1,
///     |count| count,
/// );
///
/// assert_eq!(counts.get(&Some('a')), Some(&2));
/// assert_eq!(counts.get(&Some('b')), Some(&1));
/// ```
#[must_use]
pub fn group_reduce<T, K, A, R>(
    items: &[T],
    mut key_fn: impl FnMut(&T) -> K,
    mut seed_fn: impl FnMut() -> A,
    mut combine_fn: impl FnMut(&mut A, &T),
    mut finish_fn: impl FnMut(A) -> R,
) -> HashMap<K, R>
where
    K: Eq + Hash,
{
    let mut accumulators: HashMap<K, A> = HashMap::new();
    for item in items {
        let acc = accumulators
            .entry(key_fn(item))
            .or_insert_with(&mut seed_fn);
        combine_fn(acc, item);
    }
    accumulators
        .into_iter()
        .map(|(key, acc)| (key, finish_fn(acc)))
        .collect()
}
