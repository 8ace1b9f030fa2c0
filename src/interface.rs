//! Dropscan shared type definitions
//!
//! This file is the source of truth for the types exchanged between the
//! ingestion side, the scoring/filter core, and display collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One raw tabular row, as delivered by an ingestion collaborator.
/// Values are strings, numbers, or null (empty cell); key casing is
/// preserved so the builder can scan its prioritized key-name lists.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Sort key selectable by the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Score,
    Length,
    Alphabetical,
    Tld,
    Traffic,
    Backlinks,
    Price,
}

impl SortKey {
    /// Direction used when this key is first selected.
    /// Price and length read naturally ascending; everything else descending.
    pub fn default_dir(self) -> SortDir {
        match self {
            SortKey::Price | SortKey::Length => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Three-way policy for a structural feature (hyphens, digits).
/// `Allow` means the feature must be present, `Block` that it must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    Any,
    Allow,
    Block,
}

/// Whether records must carry the human-word signal to pass filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordFilter {
    Any,
    Require,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// Optional numeric metrics attached to a row.
/// `None` means "unknown", which is distinct from zero: an unknown price
/// passes a price ceiling, an unknown traffic count fails a traffic floor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainMetrics {
    pub traffic: Option<f64>,
    pub backlinks: Option<f64>,
    pub price: Option<f64>,
}

/// One normalized, scored domain entry. Immutable once built; the full
/// record set is replaced wholesale on reload, never patched in place.
///
/// Invariants: `domain == "{sld}.{tld}"`, `length` is the char count of
/// `sld`, `keywords` is a pure function of `sld`, and `word_score` is zero
/// whenever `has_human_words` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: String,
    pub tld: String,
    pub sld: String,
    pub length: usize,
    pub has_hyphen: bool,
    pub has_number: bool,
    /// Alphabetic tokens extracted from `sld`, fragments < 3 chars dropped.
    pub keywords: Vec<String>,
    pub has_human_words: bool,
    pub word_score: u32,
    /// Composite ranking score, rounded to 2 decimals.
    pub score: f64,
    pub metrics: DomainMetrics,
    /// Original row, retained for traceability. Never consulted by scoring
    /// or filtering beyond what was extracted into the typed fields.
    pub raw: RawRow,
}

/// Filter/sort configuration. Pure data: nothing mutates a `FilterState`
/// in place. Every change produces a new value, either a full replacement
/// or a [`FilterPatch`] merged over the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text substring search over the full domain (case-insensitive).
    pub search: String,
    /// Comma-delimited keywords that must ALL appear in the domain.
    pub include: String,
    /// Comma-delimited keywords; ANY hit rejects the record.
    pub exclude: String,
    /// Selected TLDs; empty means no TLD filtering. A leading dot on a
    /// selection is tolerated and stripped at evaluation time.
    pub selected_tlds: Vec<String>,
    /// Inclusive SLD length bounds. A zero bound disables that side.
    pub length_min: usize,
    pub length_max: usize,
    pub hyphens: FieldPolicy,
    pub digits: FieldPolicy,
    pub human_words: WordFilter,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
    /// Page size cap; floored to 50 at evaluation, 0 falls back to 500.
    pub max_results: usize,
    pub price_max: Option<f64>,
    pub traffic_min: Option<f64>,
    pub backlinks_min: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            include: String::new(),
            exclude: String::new(),
            selected_tlds: Vec::new(),
            length_min: 1,
            length_max: 32,
            hyphens: FieldPolicy::Any,
            digits: FieldPolicy::Any,
            human_words: WordFilter::Any,
            sort_by: SortKey::Score,
            sort_dir: SortDir::Desc,
            max_results: 500,
            price_max: None,
            traffic_min: None,
            backlinks_min: None,
        }
    }
}

impl FilterState {
    /// Produce a new state with every `Some` field of the patch applied.
    /// Optional numeric bounds use a nested `Option` so a patch can also
    /// clear them (`Some(None)`).
    pub fn merged(&self, patch: FilterPatch) -> FilterState {
        FilterState {
            search: patch.search.unwrap_or_else(|| self.search.clone()),
            include: patch.include.unwrap_or_else(|| self.include.clone()),
            exclude: patch.exclude.unwrap_or_else(|| self.exclude.clone()),
            selected_tlds: patch
                .selected_tlds
                .unwrap_or_else(|| self.selected_tlds.clone()),
            length_min: patch.length_min.unwrap_or(self.length_min),
            length_max: patch.length_max.unwrap_or(self.length_max),
            hyphens: patch.hyphens.unwrap_or(self.hyphens),
            digits: patch.digits.unwrap_or(self.digits),
            human_words: patch.human_words.unwrap_or(self.human_words),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
            sort_dir: patch.sort_dir.unwrap_or(self.sort_dir),
            max_results: patch.max_results.unwrap_or(self.max_results),
            price_max: patch.price_max.unwrap_or(self.price_max),
            traffic_min: patch.traffic_min.unwrap_or(self.traffic_min),
            backlinks_min: patch.backlinks_min.unwrap_or(self.backlinks_min),
        }
    }
}

/// Partial [`FilterState`] update; `None` fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub selected_tlds: Option<Vec<String>>,
    pub length_min: Option<usize>,
    pub length_max: Option<usize>,
    pub hyphens: Option<FieldPolicy>,
    pub digits: Option<FieldPolicy>,
    pub human_words: Option<WordFilter>,
    pub sort_by: Option<SortKey>,
    pub sort_dir: Option<SortDir>,
    pub max_results: Option<usize>,
    pub price_max: Option<Option<f64>>,
    pub traffic_min: Option<Option<f64>>,
    pub backlinks_min: Option<Option<f64>>,
}

/// One evaluated window over the filtered, sorted record set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub records: Vec<DomainRecord>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Distinct TLD with its record count, for filter-option population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldFacet {
    pub tld: String,
    pub count: usize,
}

/// Loading/error state surfaced alongside the page view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub total_loaded: usize,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for store-level operations.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("ingest error: {0}")]
    Ingest(String),
    #[error("load cancelled")]
    Cancelled,
    /// The load finished but a newer load had already replaced it.
    #[error("load superseded by a newer source")]
    Superseded,
}

impl From<crate::ingest::IngestError> for ScanError {
    fn from(e: crate::ingest::IngestError) -> Self {
        ScanError::Ingest(e.to_string())
    }
}
