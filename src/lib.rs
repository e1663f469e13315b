//! users-api: HTTP CRUD service for a single `users` collection
//!
//! Exposes create, list/filter, update-by-id, and delete-by-filter over a
//! MongoDB collection, with JSON request/response bodies throughout.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::Config;
pub use db::{connect, DbError, UserRepo};
pub use http::{build_router, run_server, AppState, ServerConfig};
