//! Profile handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::UserProfile;

use crate::api::extractors::AccessToken;
use crate::api::AppState;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/userprofile/:user_id", get(get_profile))
}

/// Get any user's details
#[utoipa::path(
    get,
    path = "/userprofile/{user_id}",
    tag = "Profiles",
    security(("access_token" = [])),
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserProfile),
        (status = 401, description = "Not signed in or signed out"),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    token: AccessToken,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    let profile = state
        .profile_service
        .get_profile(&user_id, token.as_str())
        .await?;

    Ok(Json(profile))
}
