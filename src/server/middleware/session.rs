//! Session-per-request middleware.
//!
//! Every request routed through this layer gets a fresh `DbSession` in its extensions. The
//! session is released once the downstream handler has produced a response, whether that
//! response is a success or an error. Transactions are left to the handlers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::state::AppState;

/// Attaches a new database session to the request and releases it afterwards.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/student", get(get_students))
///     .route_layer(middleware::from_fn_with_state(state.clone(), db_session));
/// ```
pub async fn db_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let session = state.sessions.open();

    req.extensions_mut().insert(session.clone());

    let response = next.run(req).await;

    session.close();

    response
}
