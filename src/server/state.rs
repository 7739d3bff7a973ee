//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request through
//! Axum's state extraction. It only carries the session factory; handlers never touch the
//! pool directly and instead work through the session the middleware attached to their
//! request.

use sea_orm::DatabaseConnection;

use super::database::SessionFactory;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the session factory shares the underlying pool between clones.
#[derive(Clone)]
pub struct AppState {
    /// Factory producing one database session per request.
    pub sessions: SessionFactory,
}

impl AppState {
    /// Creates a new application state around an established connection pool.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            sessions: SessionFactory::new(db),
        }
    }
}
