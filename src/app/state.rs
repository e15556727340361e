//! Explicit state container for catalog consumers
//!
//! The catalog, the filtered view, the criteria, and the pager live in one
//! container updated only through the transitions below. Each transition
//! keeps the derived state consistent: publishing a load resets filters
//! and pagination, applying criteria rebuilds the view and returns to page
//! 1, and page-size changes re-clamp the current page. Readers only ever
//! see complete snapshots.

use crate::app::models::CanonicalRecord;
use crate::app::services::catalog_loader::LoadResult;
use crate::app::services::filter_engine::{self, FilterCriteria};
use crate::app::services::paginator::Paginator;
use crate::Result;

/// Session state over one published catalog
#[derive(Debug, Clone)]
pub struct ExplorerState {
    records: Vec<CanonicalRecord>,
    filtered: Vec<usize>,
    criteria: FilterCriteria,
    pager: Paginator,
    diagnostics: Option<String>,
}

impl ExplorerState {
    /// Create an empty state with the given page size
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            records: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            pager: Paginator::new(page_size)?,
            diagnostics: None,
        })
    }

    /// Replace the catalog with a completed load cycle
    ///
    /// The previous set, criteria, and page are discarded together; the
    /// new view is the full unfiltered set on page 1.
    pub fn publish(&mut self, result: LoadResult) {
        self.diagnostics = result.stats.diagnostics();
        self.records = result.records;
        self.criteria = FilterCriteria::default();
        self.filtered = (0..self.records.len()).collect();
        self.pager.reset();
    }

    /// Apply new filter criteria atomically
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.filtered = filter_engine::apply(&self.records, &criteria);
        self.criteria = criteria;
        self.pager.reset();
    }

    /// Clear all criteria, restoring the full set in original order
    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterCriteria::default());
    }

    /// Request a page change; out-of-range requests leave the page as is
    pub fn set_page(&mut self, page: usize) -> bool {
        self.pager.set_page(page, self.filtered.len())
    }

    /// Change the page size, re-clamping the current page
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.pager.set_page_size(page_size, self.filtered.len())
    }

    /// The active filter criteria
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full canonical set, in merge order
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    /// Length of the current filtered view
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Total pages over the current filtered view
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    /// The current page (1-based)
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// The configured page size
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Records on the current page of the filtered view
    pub fn current_page_records(&self) -> Vec<&CanonicalRecord> {
        self.pager
            .window(self.filtered.len())
            .filter_map(|i| self.filtered.get(i))
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Look up a record by id within the current filtered view
    pub fn record_by_id(&self, id: u32) -> Option<&CanonicalRecord> {
        self.filtered
            .iter()
            .map(|&index| &self.records[index])
            .find(|record| record.id == id)
    }

    /// Diagnostics from the last load cycle, if any source failed
    pub fn diagnostics(&self) -> Option<&str> {
        self.diagnostics.as_deref()
    }
}
