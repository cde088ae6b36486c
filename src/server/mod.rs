//! Web server for scraping pages and browsing the archive.
//!
//! Serves a single-page UI plus a small JSON API:
//! - `POST /api/scrape` runs the write path for one URL
//! - `GET /api/full-texts` and `GET /api/summaries` page through the stores
//! - `GET /api/health` reports both stores' record counts

mod error;
mod handlers;
mod routes;
mod templates;

pub use error::ApiError;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::repository::{
    DieselDocumentRepository, DieselSummaryRepository, DocumentStore, SummaryStore,
};
use crate::scrapers::{HttpClient, PageFetcher};
use crate::services::{ArchiveService, ScrapeService};
use crate::summarize::{DictionaryTranslator, Translator};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub scraper: ScrapeService,
    pub archive: ArchiveService,
}

impl AppState {
    /// Open both databases and build the HTTP client from settings.
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        settings.ensure_directories()?;

        let documents = DieselDocumentRepository::open(&settings.full_text_database_path()).await?;
        let summaries = DieselSummaryRepository::open(&settings.summary_database_path()).await?;
        let fetcher = HttpClient::with_user_agent(
            Duration::from_secs(settings.request_timeout),
            settings.user_agent.as_deref(),
        )?;
        tracing::info!(
            user_agent = fetcher.user_agent(),
            timeout_secs = settings.request_timeout,
            "page fetcher ready"
        );

        Ok(Self::from_parts(
            Arc::new(fetcher),
            Arc::new(DictionaryTranslator::default()),
            Arc::new(documents),
            Arc::new(summaries),
        ))
    }

    /// Assemble state from explicit collaborators.
    pub fn from_parts(
        fetcher: Arc<dyn PageFetcher>,
        translator: Arc<dyn Translator>,
        documents: Arc<dyn DocumentStore>,
        summaries: Arc<dyn SummaryStore>,
    ) -> Self {
        Self {
            scraper: ScrapeService::new(fetcher, translator, documents.clone(), summaries.clone()),
            archive: ArchiveService::new(documents, summaries),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(settings).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
