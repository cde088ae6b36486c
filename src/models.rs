//! Domain models for scraped pages and their summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full-content record of a scraped page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedDocument {
    /// Identity assigned by the full-content store.
    pub id: i64,
    pub url: String,
    pub title: String,
    /// Normalized plain-text body. May be empty.
    pub content: String,
    pub scraped_at: DateTime<Utc>,
}

/// A scraped page that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScrapedDocument {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// Summary derived from a [`ScrapedDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Identity assigned by the summary store.
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    /// Identity of the full-content record this summary was derived from.
    /// Not enforced across stores.
    pub source_document_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A summary that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSummaryRecord {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    pub source_document_id: i64,
}

impl NewSummaryRecord {
    /// Build the summary record for a document that was just written.
    pub fn for_document(
        document_id: i64,
        document: &NewScrapedDocument,
        summary: String,
        summary_urdu: String,
    ) -> Self {
        Self {
            url: document.url.clone(),
            title: document.title.clone(),
            summary,
            summary_urdu,
            source_document_id: document_id,
        }
    }
}

/// Result of one successful pass through the write path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeOutcome {
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    pub full_text: String,
}
