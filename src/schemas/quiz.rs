use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{AnswerRecord, Quiz, QuizAttempt, QuizQuestion};
use crate::db::types::AnswerValue;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizCreate {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub(crate) subject: String,
    #[validate(length(min = 1, message = "creator name must not be empty"))]
    pub(crate) creator_name: String,
    #[validate(length(min = 1, message = "at least one question is required"))]
    pub(crate) questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizResponse {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) title: String,
    pub(crate) subject: String,
    pub(crate) creator_name: String,
    pub(crate) created_at: String,
    pub(crate) questions: Vec<QuizQuestion>,
}

impl QuizResponse {
    pub(crate) fn from_db(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            code: quiz.code,
            title: quiz.title,
            subject: quiz.subject,
            creator_name: quiz.creator_name,
            created_at: format_primitive(quiz.created_at),
            questions: quiz.questions.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttemptAnswer {
    pub(crate) question_id: String,
    pub(crate) answer: AnswerValue,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttemptCreate {
    pub(crate) quiz_id: String,
    #[validate(length(min = 1, message = "user name must not be empty"))]
    pub(crate) user_name: String,
    pub(crate) answers: Vec<AttemptAnswer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttemptResponse {
    pub(crate) id: String,
    pub(crate) quiz_id: String,
    pub(crate) user_name: String,
    pub(crate) score: i32,
    pub(crate) total_questions: i32,
    pub(crate) answers: Vec<AnswerRecord>,
    pub(crate) completed_at: String,
}

impl AttemptResponse {
    pub(crate) fn from_db(attempt: QuizAttempt) -> Self {
        Self {
            id: attempt.id,
            quiz_id: attempt.quiz_id,
            user_name: attempt.user_name,
            score: attempt.score,
            total_questions: attempt.total_questions,
            answers: attempt.answers.0,
            completed_at: format_primitive(attempt.completed_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizDeleteRequest {
    #[serde(default)]
    pub(crate) creator_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MyAttemptQuery {
    #[serde(default)]
    pub(crate) user_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) term: String,
}
