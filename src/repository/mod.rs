//! Persistence for scraped documents and their summaries.
//!
//! Full content and summaries live in two independent SQLite databases.
//! Callers depend on the [`DocumentStore`] and [`SummaryStore`] traits so the
//! write path and the paginated readers can be driven by any backend.

pub mod diesel_document;
pub mod diesel_models;
pub mod diesel_pool;
pub mod diesel_summary;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;
use tracing::warn;

use crate::models::{NewScrapedDocument, NewSummaryRecord, ScrapedDocument, SummaryRecord};

pub use diesel_document::DieselDocumentRepository;
pub use diesel_pool::{create_diesel_pool, run_blocking, DieselError, SqlitePool};
pub use diesel_summary::DieselSummaryRepository;

/// Errors raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Which of the two stores an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    FullText,
    Summary,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::FullText => "full-content store",
            StoreKind::Summary => "summary store",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only store of full scraped content, read newest-first.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, stamping `scraped_at`. Returns the assigned identity.
    async fn insert(&self, document: &NewScrapedDocument) -> Result<i64, StoreError>;

    /// Load `limit` documents starting at `offset`, ordered by `scraped_at`
    /// descending, together with the total number of stored documents.
    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<ScrapedDocument>, u64), StoreError>;

    /// Count stored documents.
    async fn count(&self) -> Result<u64, StoreError>;
}

/// Append-only store of summaries, read newest-first.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Insert a summary, stamping `created_at`. Returns the assigned identity.
    async fn insert(&self, summary: &NewSummaryRecord) -> Result<i64, StoreError>;

    /// Load `limit` summaries starting at `offset`, ordered by `created_at`
    /// descending, together with the total number of stored summaries.
    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<SummaryRecord>, u64), StoreError>;

    /// Count stored summaries.
    async fn count(&self) -> Result<u64, StoreError>;
}

/// Format a timestamp for storage.
///
/// Fixed microsecond precision keeps the text column sortable.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            warn!(value = s, error = %e, "unparseable timestamp in store");
            DateTime::<Utc>::default()
        }
    }
}

/// Convert a row count or offset to the signed type SQLite expects.
fn to_sql_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
