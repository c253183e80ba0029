use axum::extract::{Path, Query, State};
use axum::{routing::get, routing::post, Json, Router};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::quiz::{
    AttemptCreate, AttemptResponse, MyAttemptQuery, QuizCreate, QuizDeleteRequest, QuizResponse,
    SearchQuery,
};
use crate::services::quizzes::{self, QuizError};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quizzes).post(create_quiz))
        .route("/search", get(search_quizzes))
        .route("/attempts", post(submit_attempt))
        .route("/code/:code", get(get_quiz_by_code))
        .route("/:quiz_id", get(get_quiz).delete(delete_quiz))
        .route("/:quiz_id/attempts", get(list_quiz_attempts))
        .route("/:quiz_id/my-attempt", get(my_attempt))
}

async fn list_quizzes(State(state): State<AppState>) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    let quizzes = repositories::quizzes::list_all(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch quizzes"))?;

    Ok(Json(quizzes.into_iter().map(QuizResponse::from_db).collect()))
}

async fn search_quizzes(
    Query(params): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    let quizzes = quizzes::search(state.db(), &params.term).await.map_err(map_quiz_error)?;

    Ok(Json(quizzes.into_iter().map(QuizResponse::from_db).collect()))
}

async fn get_quiz(
    Path(quiz_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QuizResponse>, ApiError> {
    let quiz = quizzes::get_by_id(state.db(), &quiz_id).await.map_err(map_quiz_error)?;

    Ok(Json(QuizResponse::from_db(quiz)))
}

async fn get_quiz_by_code(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QuizResponse>, ApiError> {
    let quiz = quizzes::get_by_code(state.db(), &code).await.map_err(map_quiz_error)?;

    Ok(Json(QuizResponse::from_db(quiz)))
}

async fn create_quiz(
    State(state): State<AppState>,
    Json(payload): Json<QuizCreate>,
) -> Result<(axum::http::StatusCode, Json<QuizResponse>), ApiError> {
    let quiz = quizzes::create_quiz(state.db(), payload).await.map_err(map_quiz_error)?;

    Ok((axum::http::StatusCode::CREATED, Json(QuizResponse::from_db(quiz))))
}

async fn delete_quiz(
    Path(quiz_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<QuizDeleteRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let requester = payload
        .creator_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("creator name is required".to_string()))?;

    quizzes::delete_quiz(state.db(), &quiz_id, requester).await.map_err(map_quiz_error)?;

    Ok(Json(serde_json::json!({ "message": "quiz deleted" })))
}

async fn list_quiz_attempts(
    Path(quiz_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AttemptResponse>>, ApiError> {
    let attempts = quizzes::list_attempts(state.db(), &quiz_id).await.map_err(map_quiz_error)?;

    Ok(Json(attempts.into_iter().map(AttemptResponse::from_db).collect()))
}

async fn my_attempt(
    Path(quiz_id): Path<String>,
    Query(params): Query<MyAttemptQuery>,
    State(state): State<AppState>,
) -> Result<Json<Option<AttemptResponse>>, ApiError> {
    let user_name = params
        .user_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user name is required".to_string()))?;

    let attempt =
        quizzes::get_attempt(state.db(), &quiz_id, user_name).await.map_err(map_quiz_error)?;

    Ok(Json(attempt.map(AttemptResponse::from_db)))
}

async fn submit_attempt(
    State(state): State<AppState>,
    Json(payload): Json<AttemptCreate>,
) -> Result<(axum::http::StatusCode, Json<AttemptResponse>), ApiError> {
    let attempt = quizzes::submit_attempt(state.db(), payload).await.map_err(map_quiz_error)?;

    Ok((axum::http::StatusCode::CREATED, Json(AttemptResponse::from_db(attempt))))
}

fn map_quiz_error(error: QuizError) -> ApiError {
    match error {
        QuizError::Validation(message) => ApiError::BadRequest(message),
        QuizError::NotFound => ApiError::NotFound("quiz not found".to_string()),
        QuizError::PermissionDenied => ApiError::Forbidden("not authorized to delete this quiz"),
        QuizError::CodeExhausted => {
            ApiError::Conflict("could not allocate a unique quiz code".to_string())
        }
        QuizError::Store(err) => ApiError::internal(err, "Quiz storage operation failed"),
    }
}

#[cfg(test)]
mod tests;
