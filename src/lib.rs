//! # blog-summarizer
//!
//! Fetches a blog page, extracts its readable text, keeps the first two
//! sentences as a summary, renders that summary word-by-word into Urdu and
//! archives the full text and the summary in two independent stores.
//!
//! ## Architecture
//!
//! The write path runs strictly in sequence:
//! 1. **Fetch** ([`scrapers::HttpClient`]): one GET with a fixed deadline
//! 2. **Extract** ([`scrapers::extract`]): title and body via a fallback chain
//! 3. **Summarize** ([`summarize::summarize`]): leading sentences, verbatim
//! 4. **Translate** ([`summarize::Translator`]): dictionary substitution
//! 5. **Persist** ([`services::ScrapeService`]): full content, then summary
//!
//! Reads ([`services::ArchiveService`]) page through either store newest-first.

pub mod cli;
pub mod config;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod scrapers;
pub mod server;
pub mod services;
pub mod summarize;
