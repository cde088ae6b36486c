//! Diesel-based full-content repository for SQLite.
//!
//! Stores one row per successful scrape in its own database. Rows are only
//! ever inserted; reads are paged newest-first.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tracing::debug;

use super::diesel_models::{LastInsertRowId, NewScrapedDocumentRow, ScrapedDocumentRecord};
use super::diesel_pool::{create_diesel_pool, run_blocking, DieselError, SqlitePool};
use super::{format_datetime, parse_datetime, to_sql_i64, DocumentStore, StoreError};
use crate::models::{NewScrapedDocument, ScrapedDocument};
use crate::schema::scraped_documents;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS scraped_documents (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    url         TEXT NOT NULL,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    scraped_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_scraped_documents_scraped_at
    ON scraped_documents (scraped_at DESC);
"#;

/// Convert a database record to a domain model.
impl From<ScrapedDocumentRecord> for ScrapedDocument {
    fn from(record: ScrapedDocumentRecord) -> Self {
        ScrapedDocument {
            id: record.id,
            url: record.url,
            title: record.title,
            content: record.content,
            scraped_at: parse_datetime(&record.scraped_at),
        }
    }
}

/// Diesel-based full-content repository with compile-time query checking.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: SqlitePool,
}

impl DieselDocumentRepository {
    /// Create a new Diesel document repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `db_path` and ensure its schema.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let repo = Self::new(create_diesel_pool(db_path)?);
        repo.init_schema().await?;
        debug!(path = %db_path.display(), "opened full-content store");
        Ok(repo)
    }

    /// Create tables and indexes if they do not exist.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        run_blocking(self.pool.clone(), |conn| conn.batch_execute(SCHEMA)).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for DieselDocumentRepository {
    async fn insert(&self, document: &NewScrapedDocument) -> Result<i64, StoreError> {
        let url = document.url.clone();
        let title = document.title.clone();
        let content = document.content.clone();
        let scraped_at = format_datetime(&Utc::now());

        let id = run_blocking(self.pool.clone(), move |conn| {
            diesel::insert_into(scraped_documents::table)
                .values(&NewScrapedDocumentRow {
                    url: &url,
                    title: &title,
                    content: &content,
                    scraped_at: &scraped_at,
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
    ) -> Result<(Vec<ScrapedDocument>, u64), StoreError> {
        let offset = to_sql_i64(offset);
        let limit = to_sql_i64(limit);

        let (records, total) = run_blocking(self.pool.clone(), move |conn| {
            conn.transaction::<_, DieselError, _>(|conn| {
                let total: i64 = scraped_documents::table.count().get_result(conn)?;
                let records = scraped_documents::table
                    .order((
                        scraped_documents::scraped_at.desc(),
                        scraped_documents::id.desc(),
                    ))
                    .limit(limit)
                    .offset(offset)
                    .select(ScrapedDocumentRecord::as_select())
                    .load(conn)?;
                Ok((records, total))
            })
        })
        .await?;

        Ok((
            records.into_iter().map(ScrapedDocument::from).collect(),
            total as u64,
        ))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = run_blocking(self.pool.clone(), |conn| {
            scraped_documents::table.count().get_result(conn)
        })
        .await?;
        Ok(count as u64)
    }
}
