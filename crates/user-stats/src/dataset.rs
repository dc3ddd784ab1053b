//! Demonstration dataset helpers.
//!
//! Provides the canonical four-user sample dataset plus a JSON parser for
//! supplying datasets as in-memory strings. There is no file or network I/O
//! here; callers own how the bytes arrive.

use crate::error::DatasetError;
use crate::user::User;

/// Returns the canonical four-user sample dataset.
///
/// Two users share a city (Moscow) so every aggregate has a multi-member
/// group to exercise; the remaining two are singleton groups.
///
/// # Example
///
/// ```
/// use user_stats::sample_users;
///
/// let users = sample_users();
///
/// assert_eq!(users.len(), 4);
/// assert_eq!(users.iter().filter(|user| user.city == "Moscow").count(), 2);
/// ```
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("Alice", 25, "Moscow"),
        User::new("Bob", 17, "SPb"),
        User::new("Charlie", 30, "Moscow"),
        User::new("Diana", 19, "Kazan"),
    ]
}

/// Parses a JSON array of user records.
///
/// Fields are camelCase; `phone` may be omitted and defaults to empty.
///
/// # Errors
///
/// Returns [`DatasetError::Parse`] if the JSON is malformed or a record is
/// missing a required field.
///
/// # Example
///
/// ```
/// use user_stats::users_from_json;
///
/// let users = users_from_json(
///     r#"[{"name": "Alice", "age": 25, "city": "Moscow"}]"#,
/// ).expect("valid dataset");
///
/// assert_eq!(users.len(), 1);
/// ```
pub fn users_from_json(json: &str) -> Result<Vec<User>, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::Parse {
        message: e.to_string(),
    })
}
