//! Assembling one output row per filing.
//!
//! A row is made of three blocks, always in this order:
//!
//! ```text
//! | 日付 | 証券コード | 会社名 | 文書タイプ | 会計期間 | <catalog facts...> | <ratios...> |
//! ```
//!
//! The first five cells come from the document list entry and the instance's own
//! reporting period, the facts block follows the [`TagCatalog`], and the ratio block
//! follows [`Ratio::ALL`].
use crate::catalog::TagCatalog;
use crate::error::Result;
use crate::parsing::facts::FactTable;
use crate::parsing::period::doc_type_label;
use crate::ratios::{Ratio, RatioEngine};
use crate::resolve::TagResolver;
use std::io::BufRead;
use tracing::debug;

const METADATA_HEADERS: [&str; 5] = ["日付", "証券コード", "会社名", "文書タイプ", "会計期間"];

/// What is known about a filing before its instance document is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilingMeta {
    /// The submission date the document was listed under (`YYYY-MM-DD`).
    pub retrieval_date: String,
    pub sec_code: String,
    pub filer_name: String,
    pub doc_type_code: String,
    /// Used for logging only.
    pub doc_id: String,
}

/// One finished CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingRow {
    pub retrieval_date: String,
    pub sec_code: String,
    pub filer_name: String,
    pub doc_type_label: String,
    pub period_label: String,
    pub raw_facts: Vec<String>,
    pub ratios: Vec<String>,
}

impl FilingRow {
    /// All cells in output order.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(
            METADATA_HEADERS.len() + self.raw_facts.len() + self.ratios.len(),
        );
        cells.push(self.retrieval_date.clone());
        cells.push(self.sec_code.clone());
        cells.push(self.filer_name.clone());
        cells.push(self.doc_type_label.clone());
        cells.push(self.period_label.clone());
        cells.extend(self.raw_facts.iter().cloned());
        cells.extend(self.ratios.iter().cloned());
        cells
    }
}

/// Turns fact tables into [`FilingRow`]s for a fixed catalog and resolution strategy.
///
/// # Example
///
/// ```rust
/// use edinetkit::{FactTable, FilingMeta, FilingProcessor};
///
/// let processor = FilingProcessor::default();
/// let meta = FilingMeta {
///     retrieval_date: "2025-07-15".to_string(),
///     sec_code: "40260".to_string(),
///     filer_name: "Example Corp".to_string(),
///     doc_type_code: "130".to_string(),
///     doc_id: "S100W001".to_string(),
/// };
/// let row = processor.process(&meta, &FactTable::default());
///
/// assert_eq!(row.doc_type_label, "四半期報告書");
/// assert_eq!(row.period_label, "不明");
/// assert_eq!(row.cells().len(), processor.header().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilingProcessor {
    catalog: TagCatalog,
    resolver: TagResolver,
    engine: RatioEngine,
}

impl FilingProcessor {
    pub fn new(catalog: TagCatalog) -> Self {
        Self {
            catalog,
            resolver: TagResolver::default(),
            engine: RatioEngine::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: TagResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &TagResolver {
        &self.resolver
    }

    /// The header row matching [`FilingRow::cells`].
    pub fn header(&self) -> Vec<String> {
        METADATA_HEADERS
            .iter()
            .copied()
            .chain(self.catalog.labels())
            .chain(Ratio::ALL.iter().map(|ratio| ratio.label()))
            .map(str::to_string)
            .collect()
    }

    /// Builds the row for a filing whose facts are already parsed. Never fails.
    pub fn process(&self, meta: &FilingMeta, table: &FactTable) -> FilingRow {
        let raw_facts = self.resolver.extract(table, &self.catalog);
        let ratios = self.engine.compute_table(table, &self.resolver).cells();
        let period_label = table.period_dates().label().to_string();

        debug!(
            "{}: {} facts, {} of {} catalog items found, period {}",
            meta.doc_id,
            table.len(),
            raw_facts.iter().filter(|v| !v.is_empty()).count(),
            raw_facts.len(),
            period_label
        );

        FilingRow {
            retrieval_date: meta.retrieval_date.clone(),
            sec_code: meta.sec_code.clone(),
            filer_name: meta.filer_name.clone(),
            doc_type_label: doc_type_label(&meta.doc_type_code).to_string(),
            period_label,
            raw_facts,
            ratios,
        }
    }

    /// Parses an instance document and builds its row.
    ///
    /// # Errors
    ///
    /// Returns `EdinetError::MalformedXml` if the document cannot be tokenized.
    pub fn process_reader<R: BufRead>(&self, meta: &FilingMeta, reader: R) -> Result<FilingRow> {
        let table = FactTable::from_reader(reader)?;
        Ok(self.process(meta, &table))
    }
}
