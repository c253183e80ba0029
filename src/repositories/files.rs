use sqlx::PgPool;
use sqlx::{Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::db::models::StudyFile;

pub(crate) const COLUMNS: &str = "\
    id, title, subject, semester, file_name, original_name, file_size, mime_type, upload_date";

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<StudyFile>, sqlx::Error> {
    sqlx::query_as::<_, StudyFile>(&format!("SELECT {COLUMNS} FROM files WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn list_filtered(
    pool: &PgPool,
    subject: Option<&str>,
    semester: Option<&str>,
) -> Result<Vec<StudyFile>, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM files"));
    let mut has_where = false;

    if let Some(subject) = subject {
        builder.push(" WHERE subject = ");
        builder.push_bind(subject);
        has_where = true;
    }

    if let Some(semester) = semester {
        builder.push(if has_where { " AND semester = " } else { " WHERE semester = " });
        builder.push_bind(semester);
    }

    builder.push(" ORDER BY upload_date DESC");

    builder.build_query_as::<StudyFile>().fetch_all(pool).await
}

pub(crate) async fn list_latest(pool: &PgPool, limit: i64) -> Result<Vec<StudyFile>, sqlx::Error> {
    sqlx::query_as::<_, StudyFile>(&format!(
        "SELECT {COLUMNS} FROM files ORDER BY upload_date DESC LIMIT $1"
    ))
    .bind(limit.clamp(1, 100))
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateFile<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subject: &'a str,
    pub semester: &'a str,
    pub file_name: &'a str,
    pub original_name: &'a str,
    pub file_size: i64,
    pub mime_type: &'a str,
    pub upload_date: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateFile<'_>) -> Result<StudyFile, sqlx::Error> {
    sqlx::query_as::<_, StudyFile>(&format!(
        "INSERT INTO files (id, title, subject, semester, file_name, original_name, file_size, mime_type, upload_date)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.title)
    .bind(params.subject)
    .bind(params.semester)
    .bind(params.file_name)
    .bind(params.original_name)
    .bind(params.file_size)
    .bind(params.mime_type)
    .bind(params.upload_date)
    .fetch_one(pool)
    .await
}
