//! # EdinetKit - XBRL fact extraction for EDINET filings
//!
//! EdinetKit turns the XBRL instance documents published through Japan's EDINET
//! disclosure system into flat, spreadsheet-friendly rows: a fixed catalog of financial
//! line items plus a set of derived ratios, one row per filing.
//!
//! ## Features
//!
//! - **Fact tables** - Tolerant XBRL reader keyed by tag, context and unit
//! - **Tag resolution** - Catalog of EDINET concepts matched by local name, with an
//!   optional preference for current-period contexts
//! - **Ratio engine** - Profitability, efficiency, liquidity and cash-flow ratios
//! - **Period labels** - Fiscal year or quarter inferred from the reporting period
//! - **EDINET API client** (`documents` feature) - Rate-limited document list and
//!   archive download
//! - **Archive extraction** (`archive` feature) - Finds the public instance in a ZIP
//!
//! ## Basic Usage
//!
//! ```rust
//! use edinetkit::{FactTable, FilingMeta, FilingProcessor, TagResolver};
//!
//! let xbrl = r#"<xbrli:xbrl xmlns:xbrli="http://www.xbrl.org/2003/instance"
//!                           xmlns:jppfs_cor="http://example.com/jppfs">
//!   <xbrli:context id="CurrentYearDuration">
//!     <xbrli:period>
//!       <xbrli:startDate>2024-04-01</xbrli:startDate>
//!       <xbrli:endDate>2025-03-31</xbrli:endDate>
//!     </xbrli:period>
//!   </xbrli:context>
//!   <jppfs_cor:NetSales contextRef="CurrentYearDuration" unitRef="JPY">1000000</jppfs_cor:NetSales>
//!   <jppfs_cor:OperatingIncome contextRef="CurrentYearDuration" unitRef="JPY">80000</jppfs_cor:OperatingIncome>
//! </xbrli:xbrl>"#;
//!
//! let table = FactTable::from_bytes(xbrl.as_bytes())?;
//! let processor = FilingProcessor::default().with_resolver(TagResolver::current_period());
//! let row = processor.process(&FilingMeta::default(), &table);
//!
//! assert_eq!(row.period_label, "2024年度");
//! assert_eq!(row.raw_facts[0], "1000000");
//! # Ok::<(), edinetkit::EdinetError>(())
//! ```

mod catalog;
mod config;
mod core;
mod error;
mod filing;
mod output;
pub mod parsing;
mod ratios;
mod resolve;

#[cfg(feature = "archive")]
pub mod archive;

#[cfg(feature = "documents")]
mod documents;
#[cfg(feature = "documents")]
mod options;
#[cfg(feature = "documents")]
mod traits;

// Core functionality (always available)
pub use catalog::{CanonicalTag, TagCatalog};
pub use config::{API_KEY_ENV, DEFAULT_BASE_URL, EdinetConfig};
pub use core::Edinet;
pub use error::{EdinetError, Result};
pub use filing::{FilingMeta, FilingProcessor, FilingRow};
pub use output::CsvSink;
pub use parsing::facts::FactTable;
pub use parsing::period::{
    DocumentType, FiscalQuarter, PeriodDates, PeriodLabel, classify_period, doc_type_label,
};
pub use parsing::utils::{format_number, parse_number};
pub use ratios::{DerivedRatios, FinancialInputs, Ratio, RatioEngine};
pub use resolve::{TagResolver, extract_facts};

#[cfg(feature = "archive")]
pub use archive::{extract_instance, extract_instance_from_reader};

#[cfg(feature = "documents")]
pub use documents::{DocInfo, DocumentListResponse, Metadata, ResultSet};
#[cfg(feature = "documents")]
pub use options::{DateRange, DocumentFilter, normalize_sec_code, parse_date};
#[cfg(feature = "documents")]
pub use traits::DocumentOperations;

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
