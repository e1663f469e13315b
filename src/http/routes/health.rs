//! Liveness route

use axum::routing::get;
use axum::Router;

/// Greeting returned from the root route.
const GREETING: &str = "users-api is alive";

/// GET / - liveness greeting
async fn greet() -> &'static str {
    GREETING
}

/// Liveness routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(greet))
}
