use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::student::{create_student, delete_student, get_students, update_student},
    docs::openapi_json,
    middleware::session::db_session,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/student", get(get_students))
        .route("/student/add", post(create_student))
        .route(
            "/student/{student_id}",
            put(update_student).delete(delete_student),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), db_session))
        .route("/api/docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
