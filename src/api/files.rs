use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::RequireAdmin;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::file::{FileCreate, FileResponse};

const DEFAULT_LATEST_LIMIT: i64 = 6;

#[derive(Debug, Deserialize)]
pub(crate) struct FileListQuery {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    semester: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatestFilesQuery {
    #[serde(default)]
    limit: Option<i64>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_files).post(create_file))
        .route("/latest", get(latest_files))
        .route("/:file_id", get(get_file))
}

async fn list_files(
    Query(params): Query<FileListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    // The client sends subject=all / semester=all for "no filter".
    let subject = params.subject.as_deref().filter(|value| !value.is_empty() && *value != "all");
    let semester = params.semester.as_deref().filter(|value| !value.is_empty() && *value != "all");

    let files = repositories::files::list_filtered(state.db(), subject, semester)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch files"))?;

    Ok(Json(files.into_iter().map(FileResponse::from_db).collect()))
}

async fn latest_files(
    Query(params): Query<LatestFilesQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LATEST_LIMIT);

    let files = repositories::files::list_latest(state.db(), limit)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch latest files"))?;

    Ok(Json(files.into_iter().map(FileResponse::from_db).collect()))
}

async fn get_file(
    Path(file_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = repositories::files::find_by_id(state.db(), &file_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch file"))?;

    let Some(file) = file else {
        return Err(ApiError::NotFound("file not found".to_string()));
    };

    Ok(Json(FileResponse::from_db(file)))
}

async fn create_file(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<FileCreate>,
) -> Result<(axum::http::StatusCode, Json<FileResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let file = repositories::files::create(
        state.db(),
        repositories::files::CreateFile {
            id: &Uuid::new_v4().to_string(),
            title: payload.title.trim(),
            subject: payload.subject.trim(),
            semester: payload.semester.trim(),
            file_name: payload.file_name.trim(),
            original_name: payload.original_name.trim(),
            file_size: payload.file_size,
            mime_type: payload.mime_type.trim(),
            upload_date: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to register file"))?;

    Ok((axum::http::StatusCode::CREATED, Json(FileResponse::from_db(file))))
}
