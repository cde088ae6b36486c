//! Diesel-based summary repository for SQLite.
//!
//! Summaries are kept in a database separate from full content. The
//! `source_document_id` column points into the other database and is not
//! enforced here.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tracing::debug;

use super::diesel_models::{LastInsertRowId, NewSummaryRow, SummaryRow};
use super::diesel_pool::{create_diesel_pool, run_blocking, DieselError, SqlitePool};
use super::{format_datetime, parse_datetime, to_sql_i64, StoreError, SummaryStore};
use crate::models::{NewSummaryRecord, SummaryRecord};
use crate::schema::summaries;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS summaries (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    url                 TEXT NOT NULL,
    title               TEXT NOT NULL,
    summary             TEXT NOT NULL,
    summary_urdu        TEXT NOT NULL,
    source_document_id  INTEGER NOT NULL,
    created_at          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_summaries_created_at
    ON summaries (created_at DESC);
"#;

impl From<SummaryRow> for SummaryRecord {
    fn from(row: SummaryRow) -> Self {
        SummaryRecord {
            id: row.id,
            url: row.url,
            title: row.title,
            summary: row.summary,
            summary_urdu: row.summary_urdu,
            source_document_id: row.source_document_id,
            created_at: parse_datetime(&row.created_at),
        }
    }
}

/// Diesel-based summary repository.
#[derive(Clone)]
pub struct DieselSummaryRepository {
    pool: SqlitePool,
}

impl DieselSummaryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `db_path` and ensure its schema.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let repo = Self::new(create_diesel_pool(db_path)?);
        repo.init_schema().await?;
        debug!(path = %db_path.display(), "opened summary store");
        Ok(repo)
    }

    /// Create tables and indexes if they do not exist.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        run_blocking(self.pool.clone(), |conn| conn.batch_execute(SCHEMA)).await?;
        Ok(())
    }
}

#[async_trait]
impl SummaryStore for DieselSummaryRepository {
    async fn insert(&self, summary: &NewSummaryRecord) -> Result<i64, StoreError> {
        let url = summary.url.clone();
        let title = summary.title.clone();
        let text = summary.summary.clone();
        let urdu = summary.summary_urdu.clone();
        let source_document_id = summary.source_document_id;
        let created_at = format_datetime(&Utc::now());

        let id = run_blocking(self.pool.clone(), move |conn| {
            diesel::insert_into(summaries::table)
                .values(&NewSummaryRow {
                    url: &url,
                    title: &title,
                    summary: &text,
                    summary_urdu: &urdu,
                    source_document_id,
                    created_at: &created_at,
                })
                .execute(conn)?;

            diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertRowId>(conn)
                .map(|r| r.id)
        })
        .await?;

        Ok(id)
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<SummaryRecord>, u64), StoreError> {
        let offset = to_sql_i64(offset);
        let limit = to_sql_i64(limit);

        let (rows, total) = run_blocking(self.pool.clone(), move |conn| {
            conn.transaction::<_, DieselError, _>(|conn| {
                let total: i64 = summaries::table.count().get_result(conn)?;
                let rows = summaries::table
                    .order((summaries::created_at.desc(), summaries::id.desc()))
                    .limit(limit)
                    .offset(offset)
                    .select(SummaryRow::as_select())
                    .load(conn)?;
                Ok((rows, total))
            })
        })
        .await?;

        Ok((rows.into_iter().map(SummaryRecord::from).collect(), total as u64))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 =
            run_blocking(self.pool.clone(), |conn| summaries::table.count().get_result(conn))
                .await?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_for(document_id: i64) -> NewSummaryRecord {
        NewSummaryRecord {
            url: "https://example.com/post".to_string(),
            title: "Post".to_string(),
            summary: "First. Second.".to_string(),
            summary_urdu: "First. Second.".to_string(),
            source_document_id: document_id,
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_source_reference() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DieselSummaryRepository::open(&dir.path().join("summaries.db"))
            .await
            .unwrap();

        let first = repo.insert(&summary_for(7)).await.unwrap();
        let second = repo.insert(&summary_for(9)).await.unwrap();
        assert!(second > first);

        let (rows, total) = repo.find_page(0, 5).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(rows[0].id, second);
        assert_eq!(rows[0].source_document_id, 9);
        assert_eq!(rows[1].source_document_id, 7);
    }

    #[tokio::test]
    async fn test_source_reference_beyond_32_bits_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DieselSummaryRepository::open(&dir.path().join("summaries.db"))
            .await
            .unwrap();
        let wide_id = (1_i64 << 32) + 7;

        repo.insert(&summary_for(wide_id)).await.unwrap();

        let (rows, _) = repo.find_page(0, 5).await.unwrap();
        assert_eq!(rows[0].source_document_id, wide_id);
    }

    #[tokio::test]
    async fn test_find_page_orders_by_created_at_desc() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DieselSummaryRepository::open(&dir.path().join("summaries.db"))
            .await
            .unwrap();
        for id in 1..=7 {
            repo.insert(&summary_for(id)).await.unwrap();
        }

        let (first, total) = repo.find_page(0, 5).await.unwrap();
        assert_eq!(total, 7);
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].source_document_id, 7);

        let (second, _) = repo.find_page(5, 5).await.unwrap();
        let ids: Vec<_> = second.iter().map(|s| s.source_document_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.db");
        {
            let repo = DieselSummaryRepository::open(&path).await.unwrap();
            repo.insert(&summary_for(1)).await.unwrap();
        }
        let repo = DieselSummaryRepository::open(&path).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
