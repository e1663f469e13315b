//! Database layer
//!
//! Connection bootstrap plus the repository for the `users` collection.
//! Required-field checks live in `models`; the database is relied on only
//! for persistence and the unique-email constraint.

mod connect;
mod users;

pub use connect::connect;
pub use users::{UserDoc, UserRepo};

use thiserror::Error;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique-index violation; a caller mistake, not a storage fault.
    #[error("{field} '{value}' is already taken")]
    Duplicate { field: &'static str, value: String },

    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),
}
