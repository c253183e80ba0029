use sqlx::types::Json;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::{AnswerRecord, QuizAttempt};

pub(crate) const COLUMNS: &str =
    "id, quiz_id, user_name, score, total_questions, answers, completed_at";

pub(crate) async fn list_by_quiz(
    pool: &PgPool,
    quiz_id: &str,
) -> Result<Vec<QuizAttempt>, sqlx::Error> {
    sqlx::query_as::<_, QuizAttempt>(&format!(
        "SELECT {COLUMNS} FROM quiz_attempts WHERE quiz_id = $1 ORDER BY completed_at DESC"
    ))
    .bind(quiz_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_first_for_user(
    pool: &PgPool,
    quiz_id: &str,
    user_name: &str,
) -> Result<Option<QuizAttempt>, sqlx::Error> {
    sqlx::query_as::<_, QuizAttempt>(&format!(
        "SELECT {COLUMNS} FROM quiz_attempts
         WHERE quiz_id = $1 AND user_name = $2
         ORDER BY completed_at ASC
         LIMIT 1"
    ))
    .bind(quiz_id)
    .bind(user_name)
    .fetch_optional(pool)
    .await
}

pub(crate) struct CreateAttempt<'a> {
    pub id: &'a str,
    pub quiz_id: &'a str,
    pub user_name: &'a str,
    pub score: i32,
    pub total_questions: i32,
    pub answers: Vec<AnswerRecord>,
    pub completed_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateAttempt<'_>,
) -> Result<QuizAttempt, sqlx::Error> {
    sqlx::query_as::<_, QuizAttempt>(&format!(
        "INSERT INTO quiz_attempts (id, quiz_id, user_name, score, total_questions, answers, completed_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.quiz_id)
    .bind(params.user_name)
    .bind(params.score)
    .bind(params.total_questions)
    .bind(Json(params.answers))
    .bind(params.completed_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn delete_by_quiz(pool: &PgPool, quiz_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM quiz_attempts WHERE quiz_id = $1").bind(quiz_id).execute(pool).await?;
    Ok(())
}
