//! Diesel ORM models for database tables.
//!
//! These models provide compile-time type checking for database operations.
//! Operations are wrapped in spawn_blocking since Diesel's SQLite backend is sync.

use diesel::prelude::*;

use crate::schema;

/// Scraped document record from the full-content database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::scraped_documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScrapedDocumentRecord {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub content: String,
    pub scraped_at: String,
}

/// New scraped document for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::scraped_documents)]
pub struct NewScrapedDocumentRow<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub scraped_at: &'a str,
}

/// Summary record from the summary database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::summaries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SummaryRow {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub summary_urdu: String,
    pub source_document_id: i64,
    pub created_at: String,
}

/// New summary for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::summaries)]
pub struct NewSummaryRow<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub summary: &'a str,
    pub summary_urdu: &'a str,
    pub source_document_id: i64,
    pub created_at: &'a str,
}

/// Result row of `SELECT last_insert_rowid() AS id`.
#[derive(QueryableByName, Debug)]
pub struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
}
