//! Trait definitions for the EDINET operations the `Edinet` client implements.
//!
//! The document list and the archive download are the only two endpoints needed to go
//! from a submission date to an XBRL instance document. They are grouped in one trait,
//! compiled with the `documents` feature, so callers (and tests) can substitute their
//! own source of filings.

use super::documents::{DocInfo, DocumentListResponse};
use super::error::Result;
use super::options::DocumentFilter;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Operations for listing submitted documents and downloading their archives.
///
/// EDINET publishes, per calendar day, the list of every document submitted that day.
/// Each entry carries a document id which can then be exchanged for a ZIP archive
/// holding the XBRL instance and its attachments.
#[async_trait]
pub trait DocumentOperations {
    /// Retrieves the list of documents submitted on `date`, with metadata.
    async fn documents(&self, date: NaiveDate) -> Result<DocumentListResponse>;
    /// Downloads the XBRL archive of a document as raw ZIP bytes.
    async fn download_xbrl_zip(&self, doc_id: &str) -> Result<Vec<u8>>;
    /// Retrieves the documents submitted on `date` that pass `filter`, in list order.
    async fn filings(&self, date: NaiveDate, filter: &DocumentFilter) -> Result<Vec<DocInfo>>;
}
