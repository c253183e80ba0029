use sqlx::types::Json;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::{Quiz, QuizQuestion};

pub(crate) const COLUMNS: &str =
    "id, code, title, subject, creator_name, created_at, questions";

pub(crate) async fn list_all(pool: &PgPool) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!(
        "SELECT {COLUMNS} FROM quizzes ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!(
        "SELECT {COLUMNS} FROM quizzes WHERE UPPER(code) = UPPER($1)"
    ))
    .bind(code)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn search(pool: &PgPool, term: &str) -> Result<Vec<Quiz>, sqlx::Error> {
    let pattern = format!("%{term}%");
    sqlx::query_as::<_, Quiz>(&format!(
        "SELECT {COLUMNS} FROM quizzes
         WHERE UPPER(code) = UPPER($1)
            OR title ILIKE $2
            OR subject ILIKE $2
            OR creator_name ILIKE $2
         ORDER BY created_at DESC"
    ))
    .bind(term)
    .bind(pattern)
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateQuiz<'a> {
    pub id: &'a str,
    pub code: &'a str,
    pub title: &'a str,
    pub subject: &'a str,
    pub creator_name: &'a str,
    pub created_at: PrimitiveDateTime,
    pub questions: Vec<QuizQuestion>,
}

pub(crate) async fn create(pool: &PgPool, params: CreateQuiz<'_>) -> Result<Quiz, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(&format!(
        "INSERT INTO quizzes (id, code, title, subject, creator_name, created_at, questions)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.code)
    .bind(params.title)
    .bind(params.subject)
    .bind(params.creator_name)
    .bind(params.created_at)
    .bind(Json(params.questions))
    .fetch_one(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM quizzes WHERE id = $1").bind(id).execute(pool).await?;
    Ok(())
}
