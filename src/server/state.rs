//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Optional application URL used as the base of hypermedia links

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL for generating links.
    ///
    /// When `None`, the hypermedia extractor falls back to the request's `Host` header.
    pub app_url: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Optional application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, app_url: Option<String>) -> Self {
        Self { db, app_url }
    }
}
