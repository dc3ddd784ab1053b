//! The user record type.
//!
//! This module defines the immutable value record every aggregate operates
//! on. Records carry no identity beyond structural equality: two users with
//! identical fields are interchangeable.

use serde::{Deserialize, Serialize};

/// An immutable user record.
///
/// Constructed once and never mutated; every aggregate in this crate clones
/// what it needs and leaves the input untouched. Serializes with camelCase
/// field names; `phone` may be omitted from JSON and defaults to empty.
///
/// # Example
///
/// ```
/// use user_stats::User;
///
/// let user = User::new("Alice", 25, "Moscow");
///
/// assert_eq!(user.name, "Alice");
/// assert_eq!(user.age, 25);
/// assert!(user.phone.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name; expected non-empty, not guaranteed unique.
    pub name: String,
    /// Age in years; expected non-negative but not enforced here (see
    /// [`crate::validate_users`]).
    pub age: i32,
    /// City label used as the grouping key; matched case-sensitively.
    pub city: String,
    /// Phone numbers; may be empty and is unused by every aggregate.
    #[serde(default)]
    pub phone: Vec<String>,
}

impl User {
    /// Creates a user record with no phone numbers.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
            phone: Vec::new(),
        }
    }
}
