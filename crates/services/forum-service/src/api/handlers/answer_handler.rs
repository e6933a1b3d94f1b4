//! Answer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::AnswerDetails;

use crate::api::extractors::{AccessToken, DeferredJson};
use crate::api::AppState;

const STATUS_CREATED: &str = "Answer Created";
const STATUS_EDITED: &str = "Answer Edited";
const STATUS_DELETED: &str = "ANSWER DELETED";

/// New answer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnswerRequest {
    /// Answer text
    #[validate(length(min = 1, message = "Answer content is required"))]
    #[schema(example = "Use a match on the enum instead.", max_length = 255)]
    pub answer: String,
}

/// Answer edit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnswerEditRequest {
    /// Replacement text
    #[validate(length(min = 1, message = "Answer content is required"))]
    #[schema(example = "Use an if-let instead.", max_length = 255)]
    pub content: String,
}

/// Outcome of an answer mutation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    pub id: Uuid,
    #[schema(example = "Answer Created")]
    pub status: String,
}

impl AnswerResponse {
    fn new(id: Uuid, status: &str) -> Self {
        Self {
            id,
            status: status.to_string(),
        }
    }
}

/// Create answer routes
pub fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/question/:question_id/answer/create", post(create_answer))
        .route("/answer/edit/:answer_id", put(edit_answer))
        .route("/answer/delete/:answer_id", delete(delete_answer))
        .route("/answer/all/:question_id", get(list_answers))
}

/// Post an answer to a question
#[utoipa::path(
    post,
    path = "/question/{question_id}/answer/create",
    tag = "Answers",
    security(("access_token" = [])),
    params(("question_id" = String, Path, description = "Question ID")),
    request_body = AnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = AnswerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not signed in or signed out"),
        (status = 404, description = "Question does not exist")
    )
)]
pub async fn create_answer(
    State(state): State<AppState>,
    token: AccessToken,
    Path(question_id): Path<String>,
    payload: DeferredJson<AnswerRequest>,
) -> AppResult<(StatusCode, Json<AnswerResponse>)> {
    let id = state
        .answer_service
        .create_answer(&question_id, payload.map(|p| p.answer), token.as_str())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AnswerResponse::new(id, STATUS_CREATED)),
    ))
}

/// Edit an answer; author only
#[utoipa::path(
    put,
    path = "/answer/edit/{answer_id}",
    tag = "Answers",
    security(("access_token" = [])),
    params(("answer_id" = String, Path, description = "Answer ID")),
    request_body = AnswerEditRequest,
    responses(
        (status = 200, description = "Answer edited", body = AnswerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not signed in, signed out, or not the author"),
        (status = 404, description = "Answer does not exist")
    )
)]
pub async fn edit_answer(
    State(state): State<AppState>,
    token: AccessToken,
    Path(answer_id): Path<String>,
    payload: DeferredJson<AnswerEditRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let id = state
        .answer_service
        .edit_answer(&answer_id, payload.map(|p| p.content), token.as_str())
        .await?;

    Ok(Json(AnswerResponse::new(id, STATUS_EDITED)))
}

/// Delete an answer; author or admin
#[utoipa::path(
    delete,
    path = "/answer/delete/{answer_id}",
    tag = "Answers",
    security(("access_token" = [])),
    params(("answer_id" = String, Path, description = "Answer ID")),
    responses(
        (status = 200, description = "Answer deleted", body = AnswerResponse),
        (status = 401, description = "Not signed in, signed out, or neither author nor admin"),
        (status = 404, description = "Answer does not exist")
    )
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    token: AccessToken,
    Path(answer_id): Path<String>,
) -> AppResult<Json<AnswerResponse>> {
    let id = state
        .answer_service
        .delete_answer(&answer_id, token.as_str())
        .await?;

    Ok(Json(AnswerResponse::new(id, STATUS_DELETED)))
}

/// All answers to a question
#[utoipa::path(
    get,
    path = "/answer/all/{question_id}",
    tag = "Answers",
    security(("access_token" = [])),
    params(("question_id" = String, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Answers in posting order", body = Vec<AnswerDetails>),
        (status = 401, description = "Not signed in or signed out"),
        (status = 404, description = "Question does not exist")
    )
)]
pub async fn list_answers(
    State(state): State<AppState>,
    token: AccessToken,
    Path(question_id): Path<String>,
) -> AppResult<Json<Vec<AnswerDetails>>> {
    let answers = state
        .answer_service
        .list_answers(&question_id, token.as_str())
        .await?;

    Ok(Json(answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_request_rejects_blank() {
        let request = AnswerRequest {
            answer: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_answer_response_shape() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(AnswerResponse::new(id, STATUS_EDITED)).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["status"], "Answer Edited");
    }
}
