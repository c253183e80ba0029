use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::StudyFile;

/// Metadata registered after the storage collaborator has accepted the bytes.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileCreate {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub(crate) subject: String,
    #[validate(length(min = 1, message = "semester must not be empty"))]
    pub(crate) semester: String,
    #[validate(length(min = 1, message = "file name must not be empty"))]
    pub(crate) file_name: String,
    #[validate(length(min = 1, message = "original name must not be empty"))]
    pub(crate) original_name: String,
    #[validate(range(min = 0, message = "file size must be non-negative"))]
    pub(crate) file_size: i64,
    #[validate(length(min = 1, message = "mime type must not be empty"))]
    pub(crate) mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: String,
    pub(crate) semester: String,
    pub(crate) file_name: String,
    pub(crate) original_name: String,
    pub(crate) file_size: i64,
    pub(crate) mime_type: String,
    pub(crate) upload_date: String,
}

impl FileResponse {
    pub(crate) fn from_db(file: StudyFile) -> Self {
        Self {
            id: file.id,
            title: file.title,
            subject: file.subject,
            semester: file.semester,
            file_name: file.file_name,
            original_name: file.original_name,
            file_size: file.file_size,
            mime_type: file.mime_type,
            upload_date: format_primitive(file.upload_date),
        }
    }
}
