//! Pure in-memory grouping and aggregation over user records.
//!
//! This crate provides a small set of side-effect-free transformations over
//! an ordered sequence of [`User`] records: predicate filtering, stable
//! grouping by city, and per-city age averaging in two observably equivalent
//! strategies. A generic [`group_reduce`] underpins the single-pass strategy.
//!
//! Every operation borrows its input and returns freshly materialized owned
//! values. Nothing here is a consumable pipeline: results can be iterated any
//! number of times, and calling an operation twice with the same input yields
//! identical results both times.
//!
//! # Example
//!
//! ```
//! use user_stats::{average_age_by_city, filter_by_age_and_city, group_by_city, sample_users};
//!
//! let users = sample_users();
//!
//! let muscovites = filter_by_age_and_city(&users, 18, "Moscow");
//! assert_eq!(muscovites.len(), 2);
//!
//! let groups = group_by_city(&users);
//! assert_eq!(groups.len(), 3);
//!
//! let averages = average_age_by_city(&users);
//! assert_eq!(averages.get("Moscow"), Some(&27.5));
//! ```

mod dataset;
mod error;
mod fold;
mod stats;
mod user;
mod validation;

pub use dataset::{sample_users, users_from_json};
pub use error::{DatasetError, InvalidRecord};
pub use fold::group_reduce;
pub use stats::{
    average_age_by_city, average_age_by_city_fold, filter_by_age_and_city, group_by_city,
};
pub use user::User;
pub use validation::validate_users;
