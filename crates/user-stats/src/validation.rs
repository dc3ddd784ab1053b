//! Record validation.
//!
//! Validation is an explicit, separate step: the aggregate operations are
//! total over any well-formed input and never validate implicitly. Callers who want the stronger guarantees (non-empty names,
//! non-negative ages) run [`validate_users`] first and get a pinpointed
//! [`InvalidRecord`] instead of silently skewed aggregates.

use crate::error::InvalidRecord;
use crate::user::User;

/// Checks every record for a non-empty name and a non-negative age.
///
/// Whitespace-only names count as empty. The first offending record wins;
/// its position in the input sequence is reported in the error.
///
/// # Errors
///
/// Returns [`InvalidRecord::EmptyName`] or [`InvalidRecord::NegativeAge`]
/// for the first record that fails.
///
/// # Example
///
/// ```
/// use user_stats::{InvalidRecord, User, validate_users};
///
/// let users = vec![User::new("Alice", 25, "Moscow"), User::new("", 30, "SPb")];
///
/// assert_eq!(validate_users(&users), Err(InvalidRecord::EmptyName { index: 1 }));
/// ```
pub fn validate_users(users: &[User]) -> Result<(), InvalidRecord> {
    for (index, user) in users.iter().enumerate() {
        if user.name.trim().is_empty() {
            return Err(InvalidRecord::EmptyName { index });
        }
        if user.age < 0 {
            return Err(InvalidRecord::NegativeAge {
                index,
                age: user.age,
            });
        }
    }
    Ok(())
}
