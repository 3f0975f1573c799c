use super::Edinet;
use super::error::{EdinetError, Result};
use super::options::DocumentFilter;
use super::parsing::utils::deserialize_null_as_empty;
use super::traits::DocumentOperations;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata block of a document list response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub resultset: Option<ResultSet>,
    #[serde(
        rename = "processDateTime",
        default,
        deserialize_with = "deserialize_null_as_empty"
    )]
    pub process_date_time: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    pub count: u32,
}

/// One submitted document, as listed by the `documents.json` endpoint.
///
/// EDINET sends `null` for attributes that do not apply (a fund has no security code,
/// a PDF-only filing has no period); those fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocInfo {
    #[serde(rename = "seqNumber", default)]
    pub seq_number: u32,
    #[serde(rename = "docID")]
    pub doc_id: String,
    #[serde(rename = "edinetCode", default, deserialize_with = "deserialize_null_as_empty")]
    pub edinet_code: String,
    #[serde(rename = "secCode", default, deserialize_with = "deserialize_null_as_empty")]
    pub sec_code: String,
    #[serde(rename = "filerName", default, deserialize_with = "deserialize_null_as_empty")]
    pub filer_name: String,
    #[serde(rename = "docTypeCode", default, deserialize_with = "deserialize_null_as_empty")]
    pub doc_type_code: String,
    #[serde(rename = "xbrlFlag", default, deserialize_with = "deserialize_null_as_empty")]
    pub xbrl_flag: String,
    #[serde(rename = "periodStart", default, deserialize_with = "deserialize_null_as_empty")]
    pub period_start: String,
    #[serde(rename = "periodEnd", default, deserialize_with = "deserialize_null_as_empty")]
    pub period_end: String,
    #[serde(
        rename = "submitDateTime",
        default,
        deserialize_with = "deserialize_null_as_empty"
    )]
    pub submit_date_time: String,
    #[serde(
        rename = "docDescription",
        default,
        deserialize_with = "deserialize_null_as_empty"
    )]
    pub doc_description: String,
    #[serde(
        rename = "withdrawalStatus",
        default,
        deserialize_with = "deserialize_null_as_empty"
    )]
    pub withdrawal_status: String,
}

impl DocInfo {
    pub fn has_xbrl(&self) -> bool {
        self.xbrl_flag == "1"
    }

    /// Whether this entry passes `filter`.
    pub fn matches(&self, filter: &DocumentFilter) -> bool {
        filter.accepts(&self.doc_type_code, &self.sec_code, &self.xbrl_flag)
    }
}

/// Response of the `documents.json` endpoint with `type=2` (metadata and results).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub results: Vec<DocInfo>,
}

impl DocumentListResponse {
    /// Parses a document list, rejecting responses whose metadata status is not `200`.
    ///
    /// # Errors
    ///
    /// * `EdinetError::JsonError` - The body is not a document list
    /// * `EdinetError::InvalidResponse` - EDINET reported an error in the metadata
    pub fn from_json(content: &str) -> Result<Self> {
        let response: DocumentListResponse = serde_json::from_str(content)?;
        if response.metadata.status != "200" {
            return Err(EdinetError::InvalidResponse(format!(
                "document list status {}: {}",
                response.metadata.status, response.metadata.message
            )));
        }
        Ok(response)
    }

    /// Entries passing `filter`, in list order.
    pub fn filter(&self, filter: &DocumentFilter) -> Vec<DocInfo> {
        self.results
            .iter()
            .filter(|doc| doc.matches(filter))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct DocumentListQuery {
    date: String,
    #[serde(rename = "type")]
    kind: u8,
}

#[derive(Debug, Serialize)]
struct DownloadQuery {
    #[serde(rename = "type")]
    kind: u8,
}

/// `type=2` asks for metadata plus the full document list.
const LIST_WITH_RESULTS: u8 = 2;
/// `type=1` asks for the archive with the XBRL instance and its attachments.
const XBRL_ARCHIVE: u8 = 1;

#[derive(Debug)]
enum UrlType {
    DocumentList,
    Download,
}

impl Edinet {
    fn build_url(&self, url_type: UrlType, param: &str) -> Result<String> {
        let encode = |e: serde_urlencoded::ser::Error| {
            EdinetError::InvalidResponse(format!("Failed to encode query: {}", e))
        };
        match url_type {
            UrlType::DocumentList => {
                let query = serde_urlencoded::to_string(DocumentListQuery {
                    date: param.to_string(),
                    kind: LIST_WITH_RESULTS,
                })
                .map_err(encode)?;
                Ok(format!("{}/documents.json?{}", self.base_url, query))
            }
            UrlType::Download => {
                let query = serde_urlencoded::to_string(DownloadQuery { kind: XBRL_ARCHIVE })
                    .map_err(encode)?;
                Ok(format!("{}/documents/{}?{}", self.base_url, param, query))
            }
        }
    }
}

/// Implementation of document operations for the EDINET API.
///
/// # Examples
///
/// ```ignore
/// use edinetkit::{DocumentFilter, DocumentOperations, Edinet};
/// use chrono::NaiveDate;
///
/// let edinet = Edinet::new("your-subscription-key")?;
/// let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
///
/// let filter = DocumentFilter::new().with_sec_code("4026");
/// for doc in edinet.filings(date, &filter).await? {
///     let archive = edinet.download_xbrl_zip(&doc.doc_id).await?;
///     println!("{} {} ({} bytes)", doc.doc_id, doc.filer_name, archive.len());
/// }
/// ```
///
/// # Errors
///
/// - `EdinetError::NotFound`: the document id is unknown
/// - `EdinetError::InvalidResponse`: EDINET rejected the request or answered with an error
/// - Network-related errors during HTTP requests
#[async_trait]
impl DocumentOperations for Edinet {
    async fn documents(&self, date: NaiveDate) -> Result<DocumentListResponse> {
        let url = self.build_url(UrlType::DocumentList, &date.format("%Y-%m-%d").to_string())?;
        tracing::debug!("Fetching document list: {}", url);
        let response = self.get(&url).await?;
        DocumentListResponse::from_json(&response)
    }

    async fn download_xbrl_zip(&self, doc_id: &str) -> Result<Vec<u8>> {
        let url = self.build_url(UrlType::Download, doc_id)?;
        tracing::debug!("Downloading archive: {}", url);
        self.get_bytes(&url).await
    }

    async fn filings(&self, date: NaiveDate, filter: &DocumentFilter) -> Result<Vec<DocInfo>> {
        let list = self.documents(date).await?;
        let filings = list.filter(filter);
        tracing::info!(
            "{}: {} documents listed, {} selected",
            date,
            list.results.len(),
            filings.len()
        );
        Ok(filings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"{
        "metadata": {
            "title": "提出された書類を把握するためのAPI",
            "parameter": {"date": "2025-07-15", "type": "2"},
            "resultset": {"count": 3},
            "processDateTime": "2025-07-16 00:01",
            "status": "200",
            "message": "OK"
        },
        "results": [
            {"seqNumber": 1, "docID": "S100W001", "edinetCode": "E00001", "secCode": "40260",
             "filerName": "テスト化学株式会社", "docTypeCode": "130", "xbrlFlag": "1",
             "periodStart": "2025-04-01", "periodEnd": "2025-06-30",
             "submitDateTime": "2025-07-15 15:00", "docDescription": "四半期報告書",
             "withdrawalStatus": "0"},
            {"seqNumber": 2, "docID": "S100W002", "edinetCode": "E12345", "secCode": null,
             "filerName": "テストファンド", "docTypeCode": "120", "xbrlFlag": "1",
             "periodStart": null, "periodEnd": null,
             "submitDateTime": "2025-07-15 15:05", "docDescription": null,
             "withdrawalStatus": "0"},
            {"seqNumber": 3, "docID": "S100W003", "edinetCode": "E00001", "secCode": "40260",
             "filerName": "テスト化学株式会社", "docTypeCode": "350", "xbrlFlag": "0",
             "periodStart": null, "periodEnd": null,
             "submitDateTime": "2025-07-15 15:10", "docDescription": "大量保有報告書",
             "withdrawalStatus": "0"}
        ]
    }"#;

    #[test]
    fn test_parse_document_list() {
        let list = DocumentListResponse::from_json(LIST).unwrap();
        assert_eq!(list.metadata.status, "200");
        assert_eq!(list.metadata.resultset.as_ref().map(|r| r.count), Some(3));
        assert_eq!(list.results.len(), 3);

        let fund = &list.results[1];
        assert_eq!(fund.sec_code, "");
        assert_eq!(fund.period_start, "");
        assert_eq!(fund.doc_description, "");
        assert!(fund.has_xbrl());
    }

    #[test]
    fn test_filter_document_list() {
        let list = DocumentListResponse::from_json(LIST).unwrap();

        let ids: Vec<_> = list
            .filter(&DocumentFilter::default())
            .into_iter()
            .map(|d| d.doc_id)
            .collect();
        assert_eq!(ids, vec!["S100W001", "S100W002"]);

        let ids: Vec<_> = list
            .filter(&DocumentFilter::new().with_sec_code("4026"))
            .into_iter()
            .map(|d| d.doc_id)
            .collect();
        assert_eq!(ids, vec!["S100W001"]);
    }

    #[test]
    fn test_error_status() {
        let body = r#"{"metadata": {"title": "", "status": "400", "message": "Bad Request"}}"#;
        match DocumentListResponse::from_json(body) {
            Err(EdinetError::InvalidResponse(msg)) => assert!(msg.contains("400")),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
        assert!(matches!(
            DocumentListResponse::from_json("not json"),
            Err(EdinetError::JsonError(_))
        ));
    }

    #[test]
    fn test_build_url() {
        let edinet = Edinet::new("key").unwrap();
        assert_eq!(
            edinet.build_url(UrlType::DocumentList, "2025-07-15").unwrap(),
            "https://api.edinet-fsa.go.jp/api/v2/documents.json?date=2025-07-15&type=2"
        );
        assert_eq!(
            edinet.build_url(UrlType::Download, "S100W001").unwrap(),
            "https://api.edinet-fsa.go.jp/api/v2/documents/S100W001?type=1"
        );
    }
}
