use sqlx::PgExecutor;

use crate::db::models::WeeklyEntry;

pub(crate) const COLUMNS: &str = "id, day, date, subject, topics, has_exam, position";

pub(crate) async fn list_all(
    executor: impl PgExecutor<'_>,
) -> Result<Vec<WeeklyEntry>, sqlx::Error> {
    sqlx::query_as::<_, WeeklyEntry>(&format!(
        "SELECT {COLUMNS} FROM weekly_entries ORDER BY position"
    ))
    .fetch_all(executor)
    .await
}

pub(crate) async fn delete_all(executor: impl PgExecutor<'_>) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM weekly_entries").execute(executor).await?;
    Ok(())
}

pub(crate) struct CreateWeeklyEntry<'a> {
    pub id: &'a str,
    pub day: &'a str,
    pub date: &'a str,
    pub subject: Option<&'a str>,
    pub topics: Option<&'a str>,
    pub has_exam: bool,
    pub position: i32,
}

pub(crate) async fn create(
    executor: impl PgExecutor<'_>,
    params: CreateWeeklyEntry<'_>,
) -> Result<WeeklyEntry, sqlx::Error> {
    sqlx::query_as::<_, WeeklyEntry>(&format!(
        "INSERT INTO weekly_entries (id, day, date, subject, topics, has_exam, position)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.day)
    .bind(params.date)
    .bind(params.subject)
    .bind(params.topics)
    .bind(params.has_exam)
    .bind(params.position)
    .fetch_one(executor)
    .await
}
