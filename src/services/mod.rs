//! Service layer for blog-summarizer business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services can be used by CLI, web server, or other interfaces.

pub mod archive;
pub mod scrape;

pub use archive::ArchiveService;
pub use scrape::{ScrapeError, ScrapeService};
