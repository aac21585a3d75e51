//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::user::UserService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn UserService>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the flight plan document store.
    pub db: DatabaseConnection,

    /// Credential check used by `AuthGuard`.
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `user_service` - Credential check for the authentication gate
    pub fn new(db: DatabaseConnection, user_service: Arc<dyn UserService>) -> Self {
        Self { db, user_service }
    }
}
