//! HTTP handlers mapping requests onto registry operations.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;

use super::{
    ApiError, AppState,
    views::{ActivityDetailView, CatalogView, MessageView},
};

/// Landing page served under `/static`.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Query string carrying the participant for roster changes.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    /// Participant email.
    pub email: Option<String>,
}

impl ParticipantQuery {
    fn into_email(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingEmail)
    }
}

/// Redirects the root path to the landing page.
///
/// GET /
pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

/// Lists every activity with its roster.
///
/// GET /activities
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<CatalogView>, ApiError> {
    let catalog = state.registry().list_activities().await?;
    Ok(Json(CatalogView::from(&catalog)))
}

/// Returns one activity with roster timestamps and remaining capacity.
///
/// GET /activities/{activity_name}
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<ActivityDetailView>, ApiError> {
    let activity = state
        .registry()
        .find_activity(&activity_name)
        .await?
        .ok_or_else(|| ApiError::activity_not_found(&activity_name))?;
    Ok(Json(ActivityDetailView::from(&activity)))
}

/// Signs a student up for an activity.
///
/// POST /activities/{activity_name}/signup?email=
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageView>, ApiError> {
    let email = query.into_email()?;
    let confirmation = state.registry().signup(&activity_name, &email).await?;
    Ok(Json(MessageView::from(&confirmation)))
}

/// Removes a student from an activity.
///
/// DELETE /activities/{activity_name}/unregister?email=
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageView>, ApiError> {
    let email = query.into_email()?;
    let confirmation = state.registry().unregister(&activity_name, &email).await?;
    Ok(Json(MessageView::from(&confirmation)))
}
