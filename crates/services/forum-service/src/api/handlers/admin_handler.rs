//! Admin handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::delete,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use common::AppResult;

use crate::api::extractors::AccessToken;
use crate::api::AppState;

const STATUS_USER_DELETED: &str = "USER SUCCESSFULLY DELETED";

/// Outcome of a user deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDeleteResponse {
    pub id: Uuid,
    #[schema(example = "USER SUCCESSFULLY DELETED")]
    pub status: String,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/user/:user_id", delete(delete_user))
}

/// Delete a user account (admin only)
#[utoipa::path(
    delete,
    path = "/admin/user/{user_id}",
    tag = "Admin",
    security(("access_token" = [])),
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserDeleteResponse),
        (status = 401, description = "Not signed in, signed out, or not an admin"),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AccessToken,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserDeleteResponse>> {
    let id = state
        .admin_service
        .delete_user(&user_id, token.as_str())
        .await?;

    Ok(Json(UserDeleteResponse {
        id,
        status: STATUS_USER_DELETED.to_string(),
    }))
}
