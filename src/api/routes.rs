//! HTTP route definitions.

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::{AppState, handlers};

/// Creates the application router.
///
/// ## Route Structure
///
/// ```text
/// GET    /                                  - Redirect to /static/index.html
/// GET    /activities                        - List activities and rosters
/// GET    /activities/{name}                 - Activity detail
/// POST   /activities/{name}/signup?email=   - Sign up a student
/// DELETE /activities/{name}/unregister?email= - Remove a student
/// GET    /static/*                          - Landing page assets
/// ```
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity_name}", get(handlers::get_activity))
        .route("/activities/{activity_name}/signup", post(handlers::signup))
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
