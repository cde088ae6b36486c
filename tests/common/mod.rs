//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use blog_summarizer::models::{
    NewScrapedDocument, NewSummaryRecord, ScrapedDocument, SummaryRecord,
};
use blog_summarizer::repository::{
    DieselDocumentRepository, DieselSummaryRepository, DocumentStore, StoreError, SummaryStore,
};
use blog_summarizer::scrapers::{FetchError, PageFetcher};

pub const BLOG_POST_TEXT: &str =
    "Happy people laugh often. The river was calm and quiet! We walked until dark. Nobody complained?";
pub const BLOG_POST_SUMMARY: &str = "Happy people laugh often. The river was calm and quiet!";

pub const BLOG_POST: &str = r#"<!DOCTYPE html>
<html>
<head><title>Field Notes</title></head>
<body>
    <header><h1>Field Notes</h1></header>
    <nav>Home | About | Archive</nav>
    <article>
        <p>Happy people laugh often. The river was calm and quiet!</p>
        <p>We walked until dark. Nobody complained?</p>
    </article>
    <footer>Copyright 2024</footer>
    <script>console.log("tracking");</script>
</body>
</html>"#;

/// Open both SQLite stores inside a fresh temp directory.
pub async fn open_stores() -> (DieselDocumentRepository, DieselSummaryRepository, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let documents = DieselDocumentRepository::open(&dir.path().join("full_texts.db"))
        .await
        .expect("Failed to open full-content store");
    let summaries = DieselSummaryRepository::open(&dir.path().join("summaries.db"))
        .await
        .expect("Failed to open summary store");
    (documents, summaries, dir)
}

pub fn write_failure() -> StoreError {
    StoreError::Database(DieselError::DatabaseError(
        DatabaseErrorKind::Unknown,
        Box::new("disk I/O error".to_string()),
    ))
}

/// Serves fixed HTML for any URL and counts calls.
pub struct StaticFetcher {
    html: String,
    pub calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new(html: &str) -> Self {
        Self {
            html: html.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.html.clone())
    }
}

/// Fails every fetch with the error produced by `make`.
pub struct FailingFetcher {
    make: fn() -> FetchError,
}

impl FailingFetcher {
    pub fn new(make: fn() -> FetchError) -> Self {
        Self { make }
    }
}

#[async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Err((self.make)())
    }
}

/// Full-content store whose writes always fail.
pub struct BrokenDocumentStore;

#[async_trait]
impl DocumentStore for BrokenDocumentStore {
    async fn insert(&self, _document: &NewScrapedDocument) -> Result<i64, StoreError> {
        Err(write_failure())
    }

    async fn find_page(
        &self,
        _offset: u64,
        _limit: u64,
    ) -> Result<(Vec<ScrapedDocument>, u64), StoreError> {
        Ok((Vec::new(), 0))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(0)
    }
}

/// Summary store whose writes always fail.
pub struct BrokenSummaryStore;

#[async_trait]
impl SummaryStore for BrokenSummaryStore {
    async fn insert(&self, _summary: &NewSummaryRecord) -> Result<i64, StoreError> {
        Err(write_failure())
    }

    async fn find_page(
        &self,
        _offset: u64,
        _limit: u64,
    ) -> Result<(Vec<SummaryRecord>, u64), StoreError> {
        Ok((Vec::new(), 0))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(0)
    }
}

/// In-memory summary store that records every insert attempt.
#[derive(Default)]
pub struct RecordingSummaryStore {
    records: Mutex<Vec<SummaryRecord>>,
}

impl RecordingSummaryStore {
    pub fn inserted(&self) -> Vec<SummaryRecord> {
        self.records.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl SummaryStore for RecordingSummaryStore {
    async fn insert(&self, summary: &NewSummaryRecord) -> Result<i64, StoreError> {
        let mut records = self.records.lock().expect("poisoned");
        let id = records.len() as i64 + 1;
        records.push(SummaryRecord {
            id,
            url: summary.url.clone(),
            title: summary.title.clone(),
            summary: summary.summary.clone(),
            summary_urdu: summary.summary_urdu.clone(),
            source_document_id: summary.source_document_id,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<SummaryRecord>, u64), StoreError> {
        let records = self.records.lock().expect("poisoned");
        let page = records
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, records.len() as u64))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().expect("poisoned").len() as u64)
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
