//! Matching canonical catalog tags against fact-table keys.
//!
//! Fact keys carry the element name as written plus its context and unit
//! (`jppfs_cor:NetSales|contextRef=CurrentYearDuration|unitRef=JPY`), so a canonical tag
//! usually matches several keys: one per context the filer reported it for. The
//! resolver decides which of them is used.
//!
//! Two strategies are available:
//!
//! - **first match** ([`TagResolver::new`], the default): the first matching key in
//!   table order. Tables are ordered by key, so this is the lexicographically smallest
//!   match. For EDINET filings that is not necessarily the consolidated current
//!   period: `CurrentYearDuration_NonConsolidatedMember|unitRef=JPY` sorts before
//!   `CurrentYearDuration|unitRef=JPY`.
//! - **context preference** ([`TagResolver::with_context_preference`],
//!   [`TagResolver::current_period`]): the match whose `contextRef` appears earliest in
//!   a preference list, falling back to the first match.
use crate::catalog::{CanonicalTag, TagCatalog};
use crate::parsing::facts::FactTable;
use tracing::debug;

/// Contexts EDINET uses for a filer's own current-period consolidated figures, most
/// specific first.
const CURRENT_PERIOD_CONTEXTS: &[&str] = &[
    "CurrentYearDuration",
    "CurrentYearInstant",
    "CurrentYTDDuration",
    "CurrentQuarterDuration",
    "CurrentQuarterInstant",
    "InterimDuration",
    "InterimInstant",
    "FilingDateInstant",
];

/// Strategy for choosing one fact among the keys that match a canonical tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagResolver {
    preferred_contexts: Vec<String>,
}

impl TagResolver {
    /// First-match resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver preferring the given contexts, earliest listed first.
    pub fn with_context_preference<I, S>(contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred_contexts: contexts.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolver preferring EDINET's current-period contexts.
    pub fn current_period() -> Self {
        Self::with_context_preference(CURRENT_PERIOD_CONTEXTS.iter().copied())
    }

    /// Whether `key` is a fact for the concept `local`.
    ///
    /// The key's element name must end in `:Local`, either at the end of the key or
    /// right before the qualifier separator. Keys mentioning `TextBlock` never match,
    /// which keeps narrative HTML blocks out of numeric columns.
    pub fn matches(key: &str, local: &str) -> bool {
        if key.contains("TextBlock") {
            return false;
        }
        let suffix = format!(":{}", local);
        key.ends_with(&suffix) || key.contains(&format!("{}|", suffix))
    }

    /// Picks the fact value for `tag`, or `None` when no key matches.
    pub fn resolve<'a>(&self, table: &'a FactTable, tag: &CanonicalTag) -> Option<&'a str> {
        let local = tag.local_name();
        let mut candidates = table.iter().filter(|(key, _)| Self::matches(key, local));

        if self.preferred_contexts.is_empty() {
            return candidates.next().map(|(_, value)| value);
        }

        let candidates: Vec<(&str, &str)> = candidates.collect();
        for context in &self.preferred_contexts {
            if let Some((key, value)) = candidates
                .iter()
                .find(|(key, _)| context_ref(key) == Some(context.as_str()))
            {
                debug!("Resolved {} via context {} ({})", tag.name, context, key);
                return Some(value);
            }
        }
        candidates.first().map(|(_, value)| *value)
    }

    /// One value per catalog entry, in catalog order; unmatched tags yield `""`.
    ///
    /// Numeric values written with thousands separators are emitted without them
    /// (`"1,000,000"` becomes `"1000000"`); everything else is passed through verbatim.
    pub fn extract(&self, table: &FactTable, catalog: &TagCatalog) -> Vec<String> {
        catalog
            .iter()
            .map(|tag| match self.resolve(table, tag) {
                Some(value) => normalize_value(value),
                None => String::new(),
            })
            .collect()
    }
}

/// [`TagResolver::extract`] with the first-match resolver.
///
/// # Example
///
/// ```rust
/// use edinetkit::{FactTable, TagCatalog, extract_facts};
///
/// let table: FactTable = [("jppfs_cor:NetSales|contextRef=CurrentYearDuration", "1,000")]
///     .into_iter()
///     .collect();
/// let facts = extract_facts(&table, &TagCatalog::standard());
///
/// assert_eq!(facts[0], "1000");
/// assert!(facts[1..].iter().all(|f| f.is_empty()));
/// ```
pub fn extract_facts(table: &FactTable, catalog: &TagCatalog) -> Vec<String> {
    TagResolver::new().extract(table, catalog)
}

fn context_ref(key: &str) -> Option<&str> {
    key.split('|')
        .skip(1)
        .find_map(|part| part.strip_prefix("contextRef="))
}

fn is_grouped_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    digits.contains(',')
        && digits.starts_with(|c: char| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn normalize_value(value: &str) -> String {
    if is_grouped_number(value) {
        value.replace(',', "")
    } else {
        value.to_string()
    }
}
