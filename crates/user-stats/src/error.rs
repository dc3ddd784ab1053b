//! Error types for the user-stats crate.
//!
//! This module defines semantic error enums for record validation and
//! dataset parsing, following the project's error handling conventions with
//! `thiserror`. The aggregate operations themselves are total and have no
//! error path.

use thiserror::Error;

/// A user record that fails validation.
///
/// Produced only by [`crate::validate_users`]; the aggregates never validate
/// and never return this. The index identifies the first offending record in
/// the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecord {
    /// The record's name is empty or whitespace-only.
    #[error("user record at index {index} has an empty name")]
    EmptyName {
        /// Position of the record in the input sequence.
        index: usize,
    },

    /// The record's age is below zero.
    #[error("user record at index {index} has negative age {age}")]
    NegativeAge {
        /// Position of the record in the input sequence.
        index: usize,
        /// The offending age value.
        age: i32,
    },
}

/// Errors that can occur when parsing a user dataset from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid user dataset JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}
