//! Request payload types and validation
//!
//! The original service leaned on the database's dynamic schema for
//! required-field checks. Here the checks are explicit: payloads are typed,
//! presence is validated at the handler boundary, and the database is
//! trusted only for persistence and email uniqueness.

mod filter;
mod user;
mod validation;

pub use filter::UserFilter;
pub use user::{NewUser, UserPatch};
pub use validation::ValidationError;
