use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

use super::error::{EdinetError, Result};
use super::parsing::period::DocumentType;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Brings a security code to EDINET's five-digit form.
///
/// Listed-company codes are usually quoted with four digits (`4026`), while EDINET
/// reports them with a trailing check digit of `0` (`40260`). Other inputs are only
/// trimmed.
pub fn normalize_sec_code(code: &str) -> String {
    let code = code.trim();
    if code.len() == 4 && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        format!("{}0", code)
    } else {
        code.to_string()
    }
}

/// Which entries of a daily document list are worth downloading.
///
/// By default: annual and quarterly securities reports (`120`, `130`) of any filer that
/// come with XBRL data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFilter {
    pub doc_types: BTreeSet<String>,
    pub sec_code: Option<String>,
    pub require_xbrl: bool,
}

impl Default for DocumentFilter {
    fn default() -> Self {
        Self {
            doc_types: [DocumentType::SecuritiesReport, DocumentType::QuarterlyReport]
                .iter()
                .filter_map(DocumentType::code)
                .map(str::to_string)
                .collect(),
            sec_code: None,
            require_xbrl: true,
        }
    }
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc_type(mut self, code: impl Into<String>) -> Self {
        self.doc_types = BTreeSet::from([code.into()]);
        self
    }

    pub fn with_doc_types<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc_types = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the filter to one filer; four-digit codes are normalized.
    pub fn with_sec_code(mut self, code: &str) -> Self {
        let code = normalize_sec_code(code);
        self.sec_code = if code.is_empty() { None } else { Some(code) };
        self
    }

    /// Keeps only quarterly reports (`130`) when `quarterly_only` is set.
    pub fn with_quarterly_only(self, quarterly_only: bool) -> Self {
        if quarterly_only {
            self.with_doc_type("130")
        } else {
            self
        }
    }

    pub fn with_require_xbrl(mut self, require_xbrl: bool) -> Self {
        self.require_xbrl = require_xbrl;
        self
    }

    /// Whether a document with these attributes passes the filter.
    pub fn accepts(&self, doc_type_code: &str, sec_code: &str, xbrl_flag: &str) -> bool {
        if !self.doc_types.contains(doc_type_code) {
            return false;
        }
        if let Some(target) = &self.sec_code {
            if sec_code != target.as_str() {
                return false;
            }
        }
        !self.require_xbrl || xbrl_flag == "1"
    }
}

/// An inclusive range of submission dates, iterated one day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns `EdinetError::InvalidDate` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EdinetError::InvalidDate(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses both ends from `YYYY-MM-DD`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
            .take_while(move |day| *day <= end)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| EdinetError::InvalidDate(format!("{}: {}", value, e)))
}
