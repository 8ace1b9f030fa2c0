//! ScanStore - the orchestration layer between ingestion and display.
//!
//! Holds the full record set plus the current filter configuration, and
//! recomputes page views, facets, and trend scores on demand. Every derived
//! view is a pure function of (records, configuration), so a display
//! collaborator can recompute as eagerly or as lazily as it likes.
//!
//! Loading model: rows are consumed one at a time from a [`RowSource`] and
//! accumulated privately; the visible record set is swapped wholesale on
//! completion. A cancelled or superseded load discards its partial
//! accumulation — records from an old source never mix with a new one.

use crate::builder::build_record;
use crate::engine;
use crate::facets;
use crate::ingest::RowSource;
use crate::interface::{
    DomainRecord, FilterPatch, FilterState, LoadStatus, PageView, RawRow, ScanError, SortKey,
    TldFacet,
};
use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
use crate::trend;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct Inner {
    records: Vec<DomainRecord>,
    filters: FilterState,
    page: usize,
    loading: bool,
    error: Option<String>,
    /// Bumped at the start of every load; a finishing load only publishes
    /// if its generation is still current.
    generation: u64,
}

pub struct ScanStore {
    lexicon: Arc<Lexicon>,
    inner: RwLock<Inner>,
}

impl Default for ScanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanStore {
    /// Store backed by the embedded default lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(DEFAULT_LEXICON.clone())
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            inner: RwLock::new(Inner {
                records: Vec::new(),
                filters: FilterState::default(),
                page: 1,
                loading: false,
                error: None,
                generation: 0,
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Consume a row source to completion and replace the record set.
    ///
    /// Returns the number of records built. On a terminal decode error the
    /// rows accumulated so far are still published together with the error
    /// state; on cancellation the partial accumulation is discarded and the
    /// previously visible record set stays untouched.
    pub async fn load(
        &self,
        mut source: impl RowSource,
        token: CancellationToken,
    ) -> Result<usize, ScanError> {
        let generation = {
            let mut inner = self.inner.write();
            inner.generation += 1;
            inner.loading = true;
            inner.error = None;
            inner.generation
        };

        let mut built: Vec<DomainRecord> = Vec::new();
        let mut dropped = 0usize;

        loop {
            if token.is_cancelled() {
                debug!(accumulated = built.len(), "load cancelled, discarding partial rows");
                self.finish_if_current(generation, |inner| {
                    inner.loading = false;
                });
                return Err(ScanError::Cancelled);
            }

            match source.next_row().await {
                None => break,
                Some(Ok(row)) => match build_record(&row, &self.lexicon) {
                    Some(record) => built.push(record),
                    None => dropped += 1,
                },
                Some(Err(e)) => {
                    warn!(error = %e, accumulated = built.len(), "ingest stream failed");
                    let message = e.to_string();
                    let published = self.finish_if_current(generation, |inner| {
                        inner.records = std::mem::take(&mut built);
                        inner.page = 1;
                        inner.loading = false;
                        inner.error = Some(message.clone());
                    });
                    if !published {
                        return Err(ScanError::Superseded);
                    }
                    return Err(ScanError::Ingest(message));
                }
            }
        }

        let count = built.len();
        let published = self.finish_if_current(generation, |inner| {
            inner.records = std::mem::take(&mut built);
            inner.page = 1;
            inner.loading = false;
        });
        if !published {
            debug!(records = count, "load superseded by a newer source, discarding");
            return Err(ScanError::Superseded);
        }
        info!(records = count, dropped, "record set loaded");
        Ok(count)
    }

    /// Build and publish records from an in-memory row collection.
    /// Synchronous counterpart of [`ScanStore::load`] for small inputs.
    pub fn load_rows(&self, rows: impl IntoIterator<Item = RawRow>) -> usize {
        let mut built = Vec::new();
        let mut dropped = 0usize;
        for row in rows {
            match build_record(&row, &self.lexicon) {
                Some(record) => built.push(record),
                None => dropped += 1,
            }
        }
        let count = built.len();
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.records = built;
        inner.page = 1;
        inner.loading = false;
        inner.error = None;
        debug!(records = count, dropped, "record set replaced");
        count
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration intents
    // ─────────────────────────────────────────────────────────────────────────

    /// Merge a partial update over the current filters. Any filter change
    /// resets the requested page to 1.
    pub fn apply_patch(&self, patch: FilterPatch) {
        let mut inner = self.inner.write();
        inner.filters = inner.filters.merged(patch);
        inner.page = 1;
    }

    /// Replace the whole configuration.
    pub fn replace_filters(&self, filters: FilterState) {
        let mut inner = self.inner.write();
        inner.filters = filters;
        inner.page = 1;
    }

    pub fn reset_filters(&self) {
        self.replace_filters(FilterState::default());
    }

    /// Sort-header click: same key flips direction, a new key switches with
    /// its default direction. Resets the page either way.
    pub fn toggle_sort(&self, key: SortKey) {
        let mut inner = self.inner.write();
        if inner.filters.sort_by == key {
            inner.filters.sort_dir = inner.filters.sort_dir.flipped();
        } else {
            inner.filters.sort_by = key;
            inner.filters.sort_dir = key.default_dir();
        }
        inner.page = 1;
    }

    /// Request a page; the evaluated view clamps it into the valid range.
    pub fn set_page(&self, page: usize) {
        self.inner.write().page = page.max(1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// Evaluate the current configuration into a page window.
    pub fn view(&self) -> PageView {
        let inner = self.inner.read();
        engine::evaluate(&inner.records, &inner.filters, inner.page)
    }

    /// TLD facet counts over the full (unfiltered) record set.
    pub fn facets(&self) -> Vec<TldFacet> {
        facets::tld_facets(&self.inner.read().records)
    }

    /// Offline trend scores for the loaded domains, capped at `max_lookups`.
    pub fn trend_scores(&self, max_lookups: usize) -> HashMap<String, u32> {
        let inner = self.inner.read();
        trend::trend_scores(
            inner.records.iter().map(|r| r.domain.as_str()),
            max_lookups,
            &self.lexicon,
        )
    }

    pub fn filters(&self) -> FilterState {
        self.inner.read().filters.clone()
    }

    pub fn status(&self) -> LoadStatus {
        let inner = self.inner.read();
        LoadStatus {
            loading: inner.loading,
            error: inner.error.clone(),
            total_loaded: inner.records.len(),
        }
    }

    /// Apply `update` only if `generation` is still the latest load.
    /// Returns whether the update ran.
    fn finish_if_current(&self, generation: u64, update: impl FnOnce(&mut Inner)) -> bool {
        let mut inner = self.inner.write();
        if inner.generation != generation {
            return false;
        }
        update(&mut inner);
        true
    }
}
