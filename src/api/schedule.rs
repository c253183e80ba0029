use axum::extract::State;
use axum::{routing::get, Json, Router};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::RequireAdmin;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::schedule::{
    ExamEntryCreate, ExamEntryResponse, WeeklyEntryCreate, WeeklyEntryResponse,
};

pub(crate) fn exams_router() -> Router<AppState> {
    Router::new().route("/", get(list_exam_schedule).post(replace_exam_schedule))
}

pub(crate) fn weekly_router() -> Router<AppState> {
    Router::new().route("/", get(list_weekly_schedule).post(replace_weekly_schedule))
}

async fn list_exam_schedule(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamEntryResponse>>, ApiError> {
    let entries = repositories::exam_schedule::list_all(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam schedule"))?;

    Ok(Json(entries.into_iter().map(ExamEntryResponse::from_db).collect()))
}

/// The admin modal submits the whole schedule at once, so the update is a
/// wholesale replacement rather than row-level edits.
async fn replace_exam_schedule(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<Vec<ExamEntryCreate>>,
) -> Result<(axum::http::StatusCode, Json<Vec<ExamEntryResponse>>), ApiError> {
    for entry in &payload {
        entry.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    repositories::exam_schedule::delete_all(&mut *tx)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to clear exam schedule"))?;

    let mut saved = Vec::with_capacity(payload.len());
    for entry in &payload {
        let created = repositories::exam_schedule::create(
            &mut *tx,
            repositories::exam_schedule::CreateExamEntry {
                id: &Uuid::new_v4().to_string(),
                subject: entry.subject.trim(),
                date: entry.date.trim(),
                time: entry.time.trim(),
                room: entry.room.trim(),
                notes: entry.notes.as_deref(),
            },
        )
        .await
        .map_err(|e| ApiError::internal(e, "Failed to save exam schedule entry"))?;
        saved.push(ExamEntryResponse::from_db(created));
    }

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))?;

    Ok((axum::http::StatusCode::CREATED, Json(saved)))
}

async fn list_weekly_schedule(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeeklyEntryResponse>>, ApiError> {
    let entries = repositories::weekly_schedule::list_all(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch weekly schedule"))?;

    Ok(Json(entries.into_iter().map(WeeklyEntryResponse::from_db).collect()))
}

async fn replace_weekly_schedule(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<Vec<WeeklyEntryCreate>>,
) -> Result<(axum::http::StatusCode, Json<Vec<WeeklyEntryResponse>>), ApiError> {
    for entry in &payload {
        entry.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    repositories::weekly_schedule::delete_all(&mut *tx)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to clear weekly schedule"))?;

    let mut saved = Vec::with_capacity(payload.len());
    for (index, entry) in payload.iter().enumerate() {
        let created = repositories::weekly_schedule::create(
            &mut *tx,
            repositories::weekly_schedule::CreateWeeklyEntry {
                id: &Uuid::new_v4().to_string(),
                day: entry.day.trim(),
                date: entry.date.trim(),
                subject: entry.subject.as_deref(),
                topics: entry.topics.as_deref(),
                has_exam: entry.has_exam,
                position: index as i32,
            },
        )
        .await
        .map_err(|e| ApiError::internal(e, "Failed to save weekly schedule entry"))?;
        saved.push(WeeklyEntryResponse::from_db(created));
    }

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))?;

    Ok((axum::http::StatusCode::CREATED, Json(saved)))
}
