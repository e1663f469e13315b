//! Connection bootstrap
//!
//! The driver connects lazily, so a `ping` round-trip is issued here to
//! surface bad URIs, unreachable hosts, and auth failures at startup
//! instead of on the first request.

use mongodb::bson::doc;
use mongodb::{Client, Database};

use super::DbError;

/// Database name used when the connection URI does not name one.
const DEFAULT_DB_NAME: &str = "users_api";

/// Connect to MongoDB and verify the connection with a ping.
///
/// Returns the database handle shared by all handlers for the life of the
/// process. The caller treats any error as fatal; this service has no
/// useful behavior without storage.
pub async fn connect(mongo_uri: &str) -> Result<Database, DbError> {
    let client = Client::with_uri_str(mongo_uri).await?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DB_NAME));

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!(db = %db.name(), "MongoDB connected");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_uri_is_rejected() {
        let err = connect("not-a-mongodb-uri").await.unwrap_err();
        assert!(matches!(err, DbError::Driver(_)));
    }

    // Integration tests require a running MongoDB.
    // Run with: MONGO_URI=mongodb://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_succeeds_against_live_server() {
        let uri = std::env::var("MONGO_URI").expect("MONGO_URI required");
        let db = connect(&uri).await.expect("connect failed");
        assert!(!db.name().is_empty());
    }
}
