//! Fiscal period labels and document-type labels.
//!
//! EDINET filings do not carry an explicit "this is Q2" marker that is reliable across
//! filers, so the label is inferred from the length and end month of the reporting
//! period:
//!
//! ```text
//! 2024-04-01 .. 2025-03-31  (365 days, ends in March)   -> 2024年度
//! 2024-01-01 .. 2024-12-31  (365 days)                  -> 2024年度
//! 2024-04-01 .. 2024-06-30  ( 90 days, ends in June)    -> 2024Q1
//! 2024-01-01 .. 2024-03-31  ( 90 days, ends in March)   -> 2023Q4
//! ```
//!
//! Quarters follow the April-March fiscal year used by most Japanese filers.
use chrono::{Datelike, NaiveDate};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Periods longer than this many days are treated as annual.
const ANNUAL_THRESHOLD_DAYS: i64 = 300;

/// Raw reporting-period boundaries as found in the document (`YYYY-MM-DD`, possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodDates {
    pub start: String,
    pub end: String,
}

impl PeriodDates {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Classifies these dates; see [`classify_period`].
    pub fn label(&self) -> PeriodLabel {
        classify_period(&self.start, &self.end)
    }
}

/// Fiscal quarter of an April-March fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiscalQuarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl FiscalQuarter {
    /// Maps the calendar month a quarterly period ends in to its fiscal quarter.
    ///
    /// - April through June: Q1
    /// - July through September: Q2
    /// - October through December: Q3
    /// - January through March: Q4 (of the fiscal year that started the previous April)
    pub fn from_end_month(month: u32) -> Self {
        match month {
            1..=3 => FiscalQuarter::Q4,
            4..=6 => FiscalQuarter::Q1,
            7..=9 => FiscalQuarter::Q2,
            _ => FiscalQuarter::Q3,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// Display label of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodLabel {
    /// A full fiscal year, labelled by the calendar year it started in.
    FiscalYear(i32),
    /// A single fiscal quarter.
    Quarter { year: i32, quarter: FiscalQuarter },
    /// Dates missing or unparseable.
    Unknown,
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodLabel::FiscalYear(year) => write!(f, "{}年度", year),
            PeriodLabel::Quarter { year, quarter } => write!(f, "{}Q{}", year, quarter.as_i32()),
            PeriodLabel::Unknown => f.write_str("不明"),
        }
    }
}

/// Infers the fiscal period label from a `YYYY-MM-DD` start/end pair.
///
/// Never fails: an empty or unparseable date yields [`PeriodLabel::Unknown`].
///
/// A period of more than 300 days is annual and labelled by `end.year`, minus one when
/// the year ends in March. Anything shorter is a quarter, derived from the end month
/// with [`FiscalQuarter::from_end_month`]; a Q4 belongs to the previous calendar year.
///
/// # Example
///
/// ```rust
/// use edinetkit::parsing::period::classify_period;
///
/// assert_eq!(classify_period("2024-04-01", "2025-03-31").to_string(), "2024年度");
/// assert_eq!(classify_period("2024-07-01", "2024-09-30").to_string(), "2024Q2");
/// assert_eq!(classify_period("", "2024-03-31").to_string(), "不明");
/// ```
pub fn classify_period(start: &str, end: &str) -> PeriodLabel {
    let (Some(start), Some(end)) = (parse_period_date(start), parse_period_date(end)) else {
        return PeriodLabel::Unknown;
    };

    let days = (end - start).num_days();
    if days > ANNUAL_THRESHOLD_DAYS {
        let year = if end.month() == 3 {
            end.year() - 1
        } else {
            end.year()
        };
        return PeriodLabel::FiscalYear(year);
    }

    let quarter = FiscalQuarter::from_end_month(end.month());
    let year = match quarter {
        FiscalQuarter::Q4 => end.year() - 1,
        _ => end.year(),
    };
    PeriodLabel::Quarter { year, quarter }
}

/// Parses a date written exactly as `YYYY-MM-DD`.
///
/// chrono alone also accepts unpadded fields, leading whitespace and signed years.
fn parse_period_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// EDINET document type, keyed by the `docTypeCode` of the document list API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    SecuritiesReport,
    QuarterlyReport,
    SecuritiesRegistrationStatement,
    ShelfRegistrationStatement,
    ShelfRegistrationSupplement,
    AmendedSecuritiesReport,
    AmendedQuarterlyReport,
    AmendedSecuritiesRegistrationStatement,
    ForeignCompanySecuritiesReport,
    ForeignCompanyQuarterlyReport,
    Other,
}

impl DocumentType {
    pub const VARIANTS: &'static [(&'static str, DocumentType)] = &[
        ("120", DocumentType::SecuritiesReport),
        ("130", DocumentType::QuarterlyReport),
        ("140", DocumentType::SecuritiesRegistrationStatement),
        ("150", DocumentType::ShelfRegistrationStatement),
        ("160", DocumentType::ShelfRegistrationSupplement),
        ("170", DocumentType::AmendedSecuritiesReport),
        ("180", DocumentType::AmendedQuarterlyReport),
        ("190", DocumentType::AmendedSecuritiesRegistrationStatement),
        ("200", DocumentType::ForeignCompanySecuritiesReport),
        ("210", DocumentType::ForeignCompanyQuarterlyReport),
    ];

    /// Looks up a document-type code; unknown codes (including `""`) map to `Other`.
    pub fn from_code(code: &str) -> Self {
        Self::VARIANTS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, variant)| *variant)
            .unwrap_or(DocumentType::Other)
    }

    /// The EDINET code, or `None` for `Other`.
    pub fn code(&self) -> Option<&'static str> {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(c, _)| *c)
    }

    /// Japanese display label used in the CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::SecuritiesReport => "有価証券報告書",
            DocumentType::QuarterlyReport => "四半期報告書",
            DocumentType::SecuritiesRegistrationStatement => "有価証券届出書",
            DocumentType::ShelfRegistrationStatement => "発行登録書",
            DocumentType::ShelfRegistrationSupplement => "発行登録追補書類",
            DocumentType::AmendedSecuritiesReport => "訂正有価証券報告書",
            DocumentType::AmendedQuarterlyReport => "訂正四半期報告書",
            DocumentType::AmendedSecuritiesRegistrationStatement => "訂正有価証券届出書",
            DocumentType::ForeignCompanySecuritiesReport => "有価証券報告書（外国会社）",
            DocumentType::ForeignCompanyQuarterlyReport => "四半期報告書（外国会社）",
            DocumentType::Other => "その他",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw document-type code.
pub fn doc_type_label(code: &str) -> &'static str {
    DocumentType::from_code(code).label()
}
