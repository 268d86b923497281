//! Tests for the Bookshelf service.
//!
//! - **store_tests**: repository operations against SQLite
//! - **api_tests**: the `/api/books` endpoints through the full router
//! - **health_api_tests**: liveness, readiness, version and metrics endpoints
//! - **security_headers_tests**: header set derived from `[security]`
//! - **types_tests**: entity serialization and payload parsing
//! - **error_tests**: error rendering and conversions
//! - **config_tests**: configuration layering and validation
//! - **db_tests**: database bootstrap
//! - **fixtures_tests**: seed data loading

pub mod db_tests;
pub mod store_tests;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Single-connection in-memory database with the schema applied.
///
/// The connection must never be recycled, otherwise the database vanishes with it.
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::init_db(&pool).await.unwrap();
    pool
}
