use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::store::BookStore;

/// The shared application state.
///
/// Cloned into every handler by axum's `State` extractor; all fields are
/// cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Repository over the `book` table.
    pub books: BookStore,
    pub config: Arc<AppConfig>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { books: BookStore::new(db), config: Arc::new(config), metrics: Metrics::new() }
    }
}
