use sqlx::PgExecutor;

use crate::db::models::ExamEntry;

pub(crate) const COLUMNS: &str = "id, subject, date, time, room, notes";

pub(crate) async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<ExamEntry>, sqlx::Error> {
    sqlx::query_as::<_, ExamEntry>(&format!("SELECT {COLUMNS} FROM exam_entries"))
        .fetch_all(executor)
        .await
}

pub(crate) async fn delete_all(executor: impl PgExecutor<'_>) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM exam_entries").execute(executor).await?;
    Ok(())
}

pub(crate) struct CreateExamEntry<'a> {
    pub id: &'a str,
    pub subject: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub room: &'a str,
    pub notes: Option<&'a str>,
}

pub(crate) async fn create(
    executor: impl PgExecutor<'_>,
    params: CreateExamEntry<'_>,
) -> Result<ExamEntry, sqlx::Error> {
    sqlx::query_as::<_, ExamEntry>(&format!(
        "INSERT INTO exam_entries (id, subject, date, time, room, notes)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.subject)
    .bind(params.date)
    .bind(params.time)
    .bind(params.room)
    .bind(params.notes)
    .fetch_one(executor)
    .await
}
