//! Route handlers
//!
//! Organized by resource:
//! - health: liveness greeting
//! - users: create, list/filter, update-by-id, delete-by-filter

pub mod health;
pub mod users;
