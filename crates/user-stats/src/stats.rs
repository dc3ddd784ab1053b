//! Aggregate operations over user records.
//!
//! Every function here is a pure transformation of a borrowed slice: inputs
//! are never mutated or consumed, and results are freshly materialized owned
//! values that can be iterated any number of times. Repeated calls with the
//! same input yield identical results.

use std::collections::HashMap;

use crate::fold::group_reduce;
use crate::user::User;

/// Selects users older than `min_age` living in `city`, sorted by name.
///
/// The age bound is a strict greater-than (`age > min_age`, so a 17-year-old
/// does not pass `min_age = 17`) and the city match is exact and
/// case-sensitive. The result is sorted by `name` ascending; an empty input
/// yields an empty result.
///
/// # Example
///
/// ```
/// use user_stats::{filter_by_age_and_city, sample_users};
///
/// let adults = filter_by_age_and_city(&sample_users(), 18, "Moscow");
/// let names: Vec<&str> = adults.iter().map(|user| user.name.as_str()).collect();
///
/// assert_eq!(names, ["Alice", "Charlie"]);
/// ```
#[must_use]
pub fn filter_by_age_and_city(users: &[User], min_age: i32, city: &str) -> Vec<User> {
    let mut selected: Vec<User> = users
        .iter()
        .filter(|user| user.age > min_age && user.city == city)
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.name.cmp(&b.name));
    selected
}

/// Partitions users by city.
///
/// The partition is stable: within each group, users keep their original
/// relative order. Every distinct city present in the input appears as a key,
/// and no group is empty. Key iteration order is unspecified.
#[must_use]
pub fn group_by_city(users: &[User]) -> HashMap<String, Vec<User>> {
    let mut groups: HashMap<String, Vec<User>> = HashMap::new();
    for user in users {
        groups
            .entry(user.city.clone())
            .or_default()
            .push(user.clone());
    }
    groups
}

/// Computes the mean age per city.
///
/// Ages are summed exactly as `i64` and divided once in floating point. An
/// empty input yields an empty map; division by zero is unreachable because
/// groups are never empty by construction. No rounding is applied here;
/// presentation formatting is the caller's concern.
///
/// # Example
///
/// ```
/// use user_stats::{average_age_by_city, sample_users};
///
/// let averages = average_age_by_city(&sample_users());
///
/// assert_eq!(averages.get("Moscow"), Some(&27.5));
/// assert_eq!(averages.get("SPb"), Some(&17.0));
/// ```
#[must_use]
pub fn average_age_by_city(users: &[User]) -> HashMap<String, f64> {
    group_by_city(users)
        .into_iter()
        .map(|(city, members)| {
            let sum: i64 = members.iter().map(|user| i64::from(user.age)).sum();
            (city, mean(sum, members.len()))
        })
        .collect()
}

/// Computes the mean age per city in a single pass.
///
/// Observably equivalent to [`average_age_by_city`] for every input: same
/// keys, same values. Instead of materializing groups and averaging them
/// afterwards, this folds a `(sum, count)` accumulator per city via
/// [`group_reduce`].
#[must_use]
pub fn average_age_by_city_fold(users: &[User]) -> HashMap<String, f64> {
    group_reduce(
        users,
        |user| user.city.clone(),
        AgeAccumulator::default,
        |acc, user| {
            acc.sum += i64::from(user.age);
            acc.count += 1;
        },
        AgeAccumulator::mean,
    )
}

/// Running `(sum, count)` state for a single city's average.
#[derive(Debug, Default)]
struct AgeAccumulator {
    sum: i64,
    count: usize,
}

impl AgeAccumulator {
    /// Finalizes the accumulator into a mean.
    const fn mean(self) -> f64 {
        mean(self.sum, self.count)
    }
}

/// Exact integer sum divided once in floating point.
///
/// Callers guarantee `count > 0`: accumulators only exist for cities that
/// contributed at least one user.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging requires one floating divide; age sums and counts sit far below the 2^52 exact-integer range of f64"
)]
const fn mean(sum: i64, count: usize) -> f64 {
    sum as f64 / count as f64
}
