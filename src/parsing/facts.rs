//! Flattening of an XBRL instance document into a key/value fact table.
//!
//! An XBRL instance is a flat list of fact elements, each tagged with a qualified
//! concept name and (usually) a `contextRef` pointing at the reporting period/entity
//! and a `unitRef` pointing at the unit of measure. The same concept typically appears
//! several times in one document: current year, prior year, consolidated,
//! non-consolidated. [`FactTable`] keeps them apart by folding both references into
//! the key:
//!
//! ```text
//! jppfs_cor:NetSales|contextRef=CurrentYearDuration|unitRef=JPY  ->  "1000000000"
//! jppfs_cor:NetSales|contextRef=Prior1YearDuration|unitRef=JPY   ->  "950000000"
//! jpdei_cor:SecurityCodeDEI|contextRef=FilingDateInstant         ->  "40260"
//! ```
//!
//! Suffixes appear only for attributes present on the element. If the exact same key
//! is seen twice, the later value replaces the earlier one.
//!
//! # Example
//!
//! ```rust
//! use edinetkit::parsing::facts::FactTable;
//!
//! let xml = r#"<xbrli:xbrl xmlns:xbrli="http://www.xbrl.org/2003/instance">
//!   <jppfs_cor:NetSales contextRef="Cur" unitRef="JPY">1000</jppfs_cor:NetSales>
//! </xbrli:xbrl>"#;
//! let table = FactTable::from_bytes(xml.as_bytes())?;
//! assert_eq!(table.get("jppfs_cor:NetSales|contextRef=Cur|unitRef=JPY"), Some("1000"));
//! # Ok::<(), edinetkit::EdinetError>(())
//! ```
use super::period::PeriodDates;
use crate::{EdinetError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

const CONTEXT_REF: &[u8] = b"contextRef";
const UNIT_REF: &[u8] = b"unitRef";
const START_DATE: &[u8] = b"startDate";
const END_DATE: &[u8] = b"endDate";

/// All textual facts of one XBRL instance document, keyed by tag name plus qualifiers.
///
/// The table is ordered by key, so iterating it (and therefore any first-match lookup
/// over it) is deterministic. It is built once per filing and never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactTable {
    facts: BTreeMap<String, String>,
    period: PeriodDates,
}

/// Which `xbrli:period` child the reader is currently inside, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PeriodSlot {
    Start,
    End,
}

impl PeriodSlot {
    fn of(element: &BytesStart<'_>) -> Option<Self> {
        let name = element.name();
        let local = name.local_name();
        if local.as_ref() == START_DATE {
            Some(PeriodSlot::Start)
        } else if local.as_ref() == END_DATE {
            Some(PeriodSlot::End)
        } else {
            None
        }
    }
}

/// Tracks the first complete `startDate`/`endDate` pair of the document.
#[derive(Debug, Default)]
struct PeriodScan {
    dates: PeriodDates,
}

impl PeriodScan {
    fn observe(&mut self, slot: PeriodSlot, text: &str) {
        if self.is_complete() {
            return;
        }
        match slot {
            PeriodSlot::Start => self.dates.start = text.to_string(),
            PeriodSlot::End => self.dates.end = text.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.dates.start.is_empty() && !self.dates.end.is_empty()
    }
}

impl FactTable {
    /// Builds a fact table by walking the XML token stream of an XBRL instance.
    ///
    /// Start tags set the "current key"; the first non-blank run of character data
    /// (text or CDATA) after it is stored under that key; end tags and self-closing
    /// tags clear it, so whitespace between elements is never attributed to a tag.
    /// Elements without text never appear in the table.
    ///
    /// The first `startDate`/`endDate` pair found in the document is captured in the
    /// same pass and exposed through [`FactTable::period_dates`].
    ///
    /// # Errors
    ///
    /// Returns `EdinetError::MalformedXml` if the stream is not well-formed XML
    /// (syntax errors, mismatched or missing end tags, invalid UTF-8, undefined
    /// entities). Read failures of the underlying stream are reported the same way.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut buf = Vec::new();

        let mut facts = BTreeMap::new();
        let mut period = PeriodScan::default();
        let mut current_key: Option<String> = None;
        let mut current_slot: Option<PeriodSlot> = None;
        let mut depth = 0usize;

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|e| {
                EdinetError::MalformedXml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(ref e) => {
                    depth += 1;
                    current_key = Some(fact_key(e)?);
                    current_slot = PeriodSlot::of(e);
                }
                Event::Empty(_) => {
                    current_key = None;
                    current_slot = None;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    current_key = None;
                    current_slot = None;
                }
                Event::Text(ref t) => {
                    let text = t.unescape()?;
                    record(&mut facts, &mut period, &current_key, current_slot, &text);
                }
                Event::CData(ref c) => {
                    let text = std::str::from_utf8(c)
                        .map_err(|e| EdinetError::MalformedXml(format!("invalid CDATA: {}", e)))?;
                    record(&mut facts, &mut period, &current_key, current_slot, text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if depth > 0 {
            return Err(EdinetError::MalformedXml(format!(
                "unexpected end of document with {} unclosed element(s)",
                depth
            )));
        }

        tracing::debug!("Built fact table with {} entries", facts.len());

        Ok(FactTable {
            facts,
            period: period.dates,
        })
    }

    /// Builds a fact table from an in-memory document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(bytes)
    }

    /// Builds a fact table from an XBRL file on disk.
    ///
    /// # Errors
    ///
    /// `EdinetError::MissingFile` when the path does not exist, otherwise the errors of
    /// [`FactTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EdinetError::MissingFile(path.to_path_buf()),
            _ => EdinetError::FileError(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Replaces the reporting-period dates, for tables assembled by hand.
    pub fn with_period_dates(mut self, dates: PeriodDates) -> Self {
        self.period = dates;
        self
    }

    /// Returns the value stored under an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.facts.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.facts.contains_key(key)
    }

    /// Iterates over all facts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.facts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// The first `startDate`/`endDate` pair of the document; empty strings when absent.
    pub fn period_dates(&self) -> &PeriodDates {
        &self.period
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FactTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FactTable {
            facts: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            period: PeriodDates::default(),
        }
    }
}

/// Builds `tagName[|contextRef=..][|unitRef=..]` for a start tag.
///
/// The tag name is the qualified name exactly as written in the document. Qualifier
/// attributes are matched by local name, so a prefixed `xbrli:contextRef` counts too.
fn fact_key(element: &BytesStart<'_>) -> Result<String> {
    let mut key = std::str::from_utf8(element.name().as_ref())
        .map_err(|e| EdinetError::MalformedXml(format!("invalid element name: {}", e)))?
        .to_string();

    let mut context_ref = None;
    let mut unit_ref = None;
    for attr in element.attributes() {
        let attr = attr.map_err(|e| EdinetError::MalformedXml(e.to_string()))?;
        let local = attr.key.local_name();
        if local.as_ref() == CONTEXT_REF {
            context_ref = Some(attr.unescape_value()?.into_owned());
        } else if local.as_ref() == UNIT_REF {
            unit_ref = Some(attr.unescape_value()?.into_owned());
        }
    }

    if let Some(context) = context_ref {
        key.push_str("|contextRef=");
        key.push_str(&context);
    }
    if let Some(unit) = unit_ref {
        key.push_str("|unitRef=");
        key.push_str(&unit);
    }
    Ok(key)
}

fn record(
    facts: &mut BTreeMap<String, String>,
    period: &mut PeriodScan,
    current_key: &Option<String>,
    current_slot: Option<PeriodSlot>,
    raw: &str,
) {
    let text = raw.trim();
    if text.is_empty() {
        return;
    }
    if let Some(key) = current_key {
        facts.insert(key.clone(), text.to_string());
    }
    if let Some(slot) = current_slot {
        period.observe(slot, text);
    }
}
