use sqlx::types::Json;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::shared::types::Row;

/// Read-only lookups over the academic resources schema
///
/// Every query aggregates its rows into one JSON array inside Postgres, so
/// rows come back with whatever columns the tables have. Identifiers are
/// compared as text: a malformed or unknown identifier matches nothing
/// instead of failing the query.
pub struct ResourceService {
    pool: PgPool,
}

impl ResourceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All semesters
    pub async fn list_semesters(&self) -> Result<Vec<Row>> {
        self.fetch_rows(
            r#"
            SELECT COALESCE(json_agg(s), '[]'::json)
            FROM (SELECT * FROM semesters) s
            "#,
            None,
            "Failed to fetch semesters",
        )
        .await
    }

    /// Subjects belonging to a semester
    pub async fn list_subjects_by_semester(&self, sem_key: &str) -> Result<Vec<Row>> {
        self.fetch_rows(
            r#"
            SELECT COALESCE(json_agg(s), '[]'::json)
            FROM (SELECT * FROM subjects WHERE semester_id::text = $1) s
            "#,
            Some(sem_key),
            "Failed to fetch subjects for the semester",
        )
        .await
    }

    /// Semester rows carrying the lab manual links for one semester id
    pub async fn list_lab_manuals(&self, sem_id: &str) -> Result<Vec<Row>> {
        self.fetch_rows(
            r#"
            SELECT COALESCE(json_agg(s), '[]'::json)
            FROM (SELECT * FROM semesters WHERE id::text = $1) s
            "#,
            Some(sem_id),
            "Failed to fetch lab manuals",
        )
        .await
    }

    pub async fn list_question_papers(&self, sub_id: &str) -> Result<Vec<Row>> {
        self.fetch_rows(
            r#"
            SELECT COALESCE(json_agg(q), '[]'::json)
            FROM (SELECT * FROM question_papers WHERE subject_id::text = $1) q
            "#,
            Some(sub_id),
            "Failed to fetch question papers",
        )
        .await
    }

    /// Notes of a subject, ordered by title
    pub async fn list_notes(&self, sub_id: &str) -> Result<Vec<Row>> {
        self.fetch_rows(
            r#"
            SELECT COALESCE(json_agg(n ORDER BY n.note_title ASC), '[]'::json)
            FROM (SELECT * FROM notes WHERE subject_id::text = $1) n
            "#,
            Some(sub_id),
            "Failed to fetch notes",
        )
        .await
    }

    async fn fetch_rows(
        &self,
        sql: &'static str,
        param: Option<&str>,
        failure_message: &'static str,
    ) -> Result<Vec<Row>> {
        let mut query = sqlx::query_scalar::<_, Json<Vec<Row>>>(sql);
        if let Some(value) = param {
            query = query.bind(value);
        }

        let Json(rows) = query.fetch_one(&self.pool).await.map_err(|e| {
            tracing::debug!("Query failed for param {:?}", param);
            AppError::Query {
                message: failure_message,
                source: e,
            }
        })?;

        Ok(rows)
    }
}
