use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::{AnswerValue, QuestionType};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct StudyFile {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: String,
    pub(crate) semester: String,
    pub(crate) file_name: String,
    pub(crate) original_name: String,
    pub(crate) file_size: i64,
    pub(crate) mime_type: String,
    pub(crate) upload_date: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct ExamEntry {
    pub(crate) id: String,
    pub(crate) subject: String,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) room: String,
    pub(crate) notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct WeeklyEntry {
    pub(crate) id: String,
    pub(crate) day: String,
    pub(crate) date: String,
    pub(crate) subject: Option<String>,
    pub(crate) topics: Option<String>,
    pub(crate) has_exam: bool,
    pub(crate) position: i32,
}

/// One question inside a quiz. Stored as part of the quiz's JSON column, so
/// field names follow the wire format rather than the database convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizQuestion {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) kind: QuestionType,
    pub(crate) text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) options: Option<Vec<String>>,
    pub(crate) correct_answer: AnswerValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Quiz {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) title: String,
    pub(crate) subject: String,
    pub(crate) creator_name: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) questions: Json<Vec<QuizQuestion>>,
}

/// A graded answer as persisted with its attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnswerRecord {
    pub(crate) question_id: String,
    pub(crate) answer: AnswerValue,
    pub(crate) is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct QuizAttempt {
    pub(crate) id: String,
    pub(crate) quiz_id: String,
    pub(crate) user_name: String,
    pub(crate) score: i32,
    pub(crate) total_questions: i32,
    pub(crate) answers: Json<Vec<AnswerRecord>>,
    pub(crate) completed_at: PrimitiveDateTime,
}
