//! The write path: fetch, extract, summarize, translate, persist.
//!
//! Persistence is a dual write across two independent stores with no shared
//! transaction. The summary is only written after the full-content insert
//! succeeded; if the summary insert then fails the full-content row stays.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::models::{NewScrapedDocument, NewSummaryRecord, ScrapeOutcome};
use crate::repository::{DocumentStore, StoreError, StoreKind, SummaryStore};
use crate::scrapers::{extract, validate_url, FetchError, PageFetcher};
use crate::summarize::{summarize, Translator};

/// Why a scrape request failed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to write to {store}: {source}")]
    StoreWrite {
        store: StoreKind,
        #[source]
        source: StoreError,
    },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ScrapeError {
    /// Whether the request itself was at fault, as opposed to a downstream failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, ScrapeError::Fetch(FetchError::InvalidUrl(_)))
    }
}

/// Runs the write path for one URL at a time.
#[derive(Clone)]
pub struct ScrapeService {
    fetcher: Arc<dyn PageFetcher>,
    translator: Arc<dyn Translator>,
    documents: Arc<dyn DocumentStore>,
    summaries: Arc<dyn SummaryStore>,
}

impl ScrapeService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        translator: Arc<dyn Translator>,
        documents: Arc<dyn DocumentStore>,
        summaries: Arc<dyn SummaryStore>,
    ) -> Self {
        Self {
            fetcher,
            translator,
            documents,
            summaries,
        }
    }

    /// Scrape `url` and persist the page and its summary.
    #[instrument(level = "info", skip(self))]
    pub async fn scrape(&self, url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        let url = url.trim();
        validate_url(url)?;

        let html = self.fetcher.fetch(url).await?;
        debug!(bytes = html.len(), "fetched page");

        // Parsing is CPU-bound and the parsed tree is not Send.
        let page = tokio::task::spawn_blocking(move || extract(&html))
            .await
            .map_err(|e| ScrapeError::Unexpected(e.to_string()))?;
        info!(title = %page.title, chars = page.content.len(), "extracted page");

        let summary = summarize(&page.content);
        let summary_urdu = self.translator.translate(&summary);

        let document = NewScrapedDocument {
            url: url.to_string(),
            title: page.title,
            content: page.content,
        };

        let document_id =
            self.documents
                .insert(&document)
                .await
                .map_err(|source| ScrapeError::StoreWrite {
                    store: StoreKind::FullText,
                    source,
                })?;
        debug!(document_id, "saved full content");

        let record = NewSummaryRecord::for_document(
            document_id,
            &document,
            summary.clone(),
            summary_urdu.clone(),
        );
        let summary_id = self.summaries.insert(&record).await.map_err(|source| {
            error!(
                document_id,
                error = %source,
                "summary write failed; full content remains without a summary"
            );
            ScrapeError::StoreWrite {
                store: StoreKind::Summary,
                source,
            }
        })?;
        info!(document_id, summary_id, "saved summary");

        Ok(ScrapeOutcome {
            title: document.title,
            summary,
            summary_urdu,
            full_text: document.content,
        })
    }
}
