use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::{ExamEntry, WeeklyEntry};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExamEntryCreate {
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub(crate) subject: String,
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub(crate) date: String,
    #[validate(length(min = 1, message = "time must not be empty"))]
    pub(crate) time: String,
    #[validate(length(min = 1, message = "room must not be empty"))]
    pub(crate) room: String,
    #[serde(default)]
    pub(crate) notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExamEntryResponse {
    pub(crate) id: String,
    pub(crate) subject: String,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) room: String,
    pub(crate) notes: Option<String>,
}

impl ExamEntryResponse {
    pub(crate) fn from_db(entry: ExamEntry) -> Self {
        Self {
            id: entry.id,
            subject: entry.subject,
            date: entry.date,
            time: entry.time,
            room: entry.room,
            notes: entry.notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeeklyEntryCreate {
    #[validate(length(min = 1, message = "day must not be empty"))]
    pub(crate) day: String,
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub(crate) date: String,
    #[serde(default)]
    pub(crate) subject: Option<String>,
    #[serde(default)]
    pub(crate) topics: Option<String>,
    #[serde(default)]
    pub(crate) has_exam: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeeklyEntryResponse {
    pub(crate) id: String,
    pub(crate) day: String,
    pub(crate) date: String,
    pub(crate) subject: Option<String>,
    pub(crate) topics: Option<String>,
    pub(crate) has_exam: bool,
}

impl WeeklyEntryResponse {
    pub(crate) fn from_db(entry: WeeklyEntry) -> Self {
        Self {
            id: entry.id,
            day: entry.day,
            date: entry.date,
            subject: entry.subject,
            topics: entry.topics,
            has_exam: entry.has_exam,
        }
    }
}
