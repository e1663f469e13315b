//! users-api entry point
//!
//! Startup order: environment → tracing → config → storage connection and
//! unique index → HTTP listener. Any failure before the listener is bound
//! exits with code 1; the service refuses to start without working storage.

use tracing_subscriber::EnvFilter;

use users_api::config::Config;
use users_api::db::{self, UserRepo};
use users_api::http::{run_server, ServerConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            std::process::exit(1);
        }
    };

    let bind_addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            std::process::exit(1);
        }
    };

    let db = match db::connect(&config.mongo_uri).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "MongoDB connection failed");
            std::process::exit(1);
        }
    };

    if let Err(err) = UserRepo::new(&db).ensure_indexes().await {
        tracing::error!(error = %err, "failed to install unique email index");
        std::process::exit(1);
    }

    if let Err(err) = run_server(&db, ServerConfig { bind_addr }).await {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
