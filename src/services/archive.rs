//! Paginated, newest-first reads over both stores.

use std::sync::Arc;

use tracing::debug;

use crate::models::{ScrapedDocument, SummaryRecord};
use crate::pagination::{Page, PageRequest, Pagination};
use crate::repository::{DocumentStore, StoreError, SummaryStore};

/// Read-only view over the full-content and summary stores.
#[derive(Clone)]
pub struct ArchiveService {
    documents: Arc<dyn DocumentStore>,
    summaries: Arc<dyn SummaryStore>,
}

impl ArchiveService {
    pub fn new(documents: Arc<dyn DocumentStore>, summaries: Arc<dyn SummaryStore>) -> Self {
        Self {
            documents,
            summaries,
        }
    }

    /// One page of full-content records, newest first.
    pub async fn full_texts(
        &self,
        request: PageRequest,
    ) -> Result<Page<ScrapedDocument>, StoreError> {
        let (items, total) = self
            .documents
            .find_page(request.offset(), request.limit())
            .await?;
        debug!(page = request.page(), returned = items.len(), total, "listed full texts");

        Ok(Page {
            items,
            pagination: Pagination::new(request, total),
        })
    }

    /// One page of summaries, newest first.
    pub async fn summaries(&self, request: PageRequest) -> Result<Page<SummaryRecord>, StoreError> {
        let (items, total) = self
            .summaries
            .find_page(request.offset(), request.limit())
            .await?;
        debug!(page = request.page(), returned = items.len(), total, "listed summaries");

        Ok(Page {
            items,
            pagination: Pagination::new(request, total),
        })
    }

    /// Record counts of (full-content, summary) stores.
    pub async fn counts(&self) -> Result<(u64, u64), StoreError> {
        let documents = self.documents.count().await?;
        let summaries = self.summaries.count().await?;
        Ok((documents, summaries))
    }
}
