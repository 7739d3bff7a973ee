//! Logical database sessions handed out one per request.
//!
//! A `DbSession` is a lightweight handle onto the shared connection pool. It does not hold a
//! physical connection by itself; one is checked out of the pool only while a transaction
//! opened through `DbSession::begin` is alive, and returned when that transaction commits or
//! is dropped (which rolls it back).

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::error::AppError;

/// Produces per-request sessions bound to the process-wide connection pool.
///
/// Cloning the factory is cheap; clones share the pool and the session accounting.
#[derive(Clone)]
pub struct SessionFactory {
    db: DatabaseConnection,
    next_id: Arc<AtomicU64>,
    open: Arc<AtomicUsize>,
}

impl SessionFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            next_id: Arc::new(AtomicU64::new(1)),
            open: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Opens a new session.
    ///
    /// The session is released when its last handle is dropped or `DbSession::close` is called
    /// on it.
    pub fn open(&self) -> DbSession {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let open = self.open.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(session_id = id, open_sessions = open, "Opened database session");

        DbSession {
            inner: Arc::new(SessionHandle {
                id,
                db: self.db.clone(),
                open: self.open.clone(),
            }),
        }
    }

    /// Number of sessions that have been opened and not yet released.
    pub fn open_sessions(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

struct SessionHandle {
    id: u64,
    db: DatabaseConnection,
    open: Arc<AtomicUsize>,
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        let open = self.open.fetch_sub(1, Ordering::SeqCst) - 1;

        tracing::debug!(
            session_id = self.id,
            open_sessions = open,
            "Closed database session"
        );
    }
}

/// A request-scoped database session.
///
/// Handlers receive it as an extractor; it is placed into the request extensions by the
/// session middleware.
#[derive(Clone)]
pub struct DbSession {
    inner: Arc<SessionHandle>,
}

impl DbSession {
    /// Identifier of this session, unique for the lifetime of its factory.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Begins a transaction on a pooled connection.
    ///
    /// The transaction must be committed explicitly; dropping it rolls back.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.inner.db.begin().await
    }

    /// Releases this handle on the session.
    ///
    /// The session itself closes once every clone of the handle is gone.
    pub fn close(self) {
        tracing::trace!(session_id = self.inner.id, "Releasing session handle");
        drop(self);
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<DbSession>().cloned().ok_or_else(|| {
            AppError::InternalError(
                "Database session missing from request, is the session middleware installed?"
                    .to_string(),
            )
        })
    }
}
