//! Selection controller.
//!
//! Holds the view state of the artwork table (current page, displayed rows,
//! total count, loading flag, select-rows prompt) together with the
//! cross-page selection set. Every state change goes through the operations
//! on [`SelectionController`].
//!
//! Page loads are split into [`SelectionController::begin_page_load`] and
//! [`SelectionController::finish_page_load`] so that the fetch itself can run
//! in a background task. Each load is tagged with a sequence number and only
//! the response to the most recently issued load is applied.

use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::api::types::page_count;
use crate::api::{Artwork, ArtworkPage, Catalog, PageWindow, PAGE_SIZE};
use crate::selection::SelectionSet;

/// A page load that has been issued but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    /// Sequence number of this load.
    pub seq: u64,
    /// The window being loaded.
    pub window: PageWindow,
}

/// Paginator movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Go to the first page.
    First,
    /// Go back one page.
    Previous,
    /// Go forward one page.
    Next,
    /// Go to the last page.
    Last,
    /// Load the current page again.
    Reload,
}

/// The artwork table state container.
#[derive(Debug, Clone)]
pub struct SelectionController {
    /// The page currently shown by the paginator.
    window: PageWindow,
    /// Rows of the last successfully loaded page.
    artworks: Vec<Artwork>,
    /// Total records reported by the last successful load.
    total_records: u64,
    /// Whether a page load is in flight.
    loading: bool,
    /// All selected artworks across pages.
    selection: SelectionSet,
    /// Whether the select-rows prompt is open.
    count_prompt_open: bool,
    /// Sequence number of the most recently issued page load.
    latest_seq: u64,
}

impl SelectionController {
    /// Create an empty controller positioned on the first page.
    pub fn new() -> Self {
        Self {
            window: PageWindow::new(0),
            artworks: Vec::new(),
            total_records: 0,
            loading: false,
            selection: SelectionSet::new(),
            count_prompt_open: false,
            latest_seq: 0,
        }
    }

    /// The 0-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.window.index
    }

    /// The current page window.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Rows currently displayed.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Total number of records in the catalog.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Number of pages in the catalog.
    pub fn page_count(&self) -> usize {
        page_count(self.total_records)
    }

    /// Whether a page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The cross-page selection set.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether the row at `index` of the current page is checked.
    pub fn is_row_checked(&self, index: usize) -> bool {
        self.artworks
            .get(index)
            .is_some_and(|a| self.selection.contains(a.id))
    }

    /// Whether every row of the current page is checked.
    pub fn is_page_checked(&self) -> bool {
        !self.artworks.is_empty()
            && self.selection.checked_on(&self.artworks).len() == self.artworks.len()
    }

    // ========================================================================
    // Page loading
    // ========================================================================

    /// Start loading the page at `index`.
    ///
    /// The paginator moves to the new page immediately; the displayed rows
    /// stay until the matching response is applied.
    pub fn begin_page_load(&mut self, index: usize) -> PageTicket {
        self.latest_seq += 1;
        self.window = PageWindow::new(index);
        self.loading = true;

        debug!(seq = self.latest_seq, page = self.window.api_page(), "Page load issued");
        PageTicket {
            seq: self.latest_seq,
            window: self.window,
        }
    }

    /// Apply the outcome of a page load.
    ///
    /// Returns `false` if the load was superseded by a newer one and its
    /// result was discarded. On failure the error is logged and the previous
    /// rows stay on screen.
    pub fn finish_page_load<E: Display>(
        &mut self,
        ticket: PageTicket,
        result: Result<ArtworkPage, E>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                page = ticket.window.api_page(),
                "Discarding superseded page response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                debug!(
                    page = ticket.window.api_page(),
                    rows = page.data.len(),
                    total = page.pagination.total,
                    "Page loaded"
                );
                self.artworks = page.data;
                self.total_records = page.pagination.total;
            }
            Err(e) => {
                warn!(page = ticket.window.api_page(), error = %e, "Failed to load artworks page");
            }
        }
        true
    }

    /// Load the page at `index` and apply the result.
    pub async fn load_page(&mut self, catalog: &dyn Catalog, index: usize) -> bool {
        let ticket = self.begin_page_load(index);
        let result = catalog.fetch_page(ticket.window).await;
        self.finish_page_load(ticket, result)
    }

    /// Resolve a paginator movement to a page index.
    ///
    /// Returns `None` when the movement would not change the page.
    pub fn nav_target(&self, nav: PageNav) -> Option<usize> {
        let current = self.window.index;
        let last = self.page_count() - 1;
        let target = match nav {
            PageNav::First => 0,
            PageNav::Previous => current.saturating_sub(1),
            PageNav::Next | PageNav::Last if current >= last => return None,
            PageNav::Next => current + 1,
            PageNav::Last => last,
            PageNav::Reload => return Some(current),
        };
        (target != current).then_some(target)
    }

    /// Start a paginator movement, if it changes anything.
    pub fn navigate(&mut self, nav: PageNav) -> Option<PageTicket> {
        self.nav_target(nav).map(|index| self.begin_page_load(index))
    }

    // ========================================================================
    // Per-page selection
    // ========================================================================

    /// Reconcile the selection set against the rows checked on the current
    /// page.
    pub fn reconcile_page(&mut self, checked: &[Artwork]) {
        self.selection.reconcile_page(&self.artworks, checked);
    }

    /// Toggle the checkbox of one row on the current page.
    pub fn toggle_row(&mut self, index: usize) {
        let Some(target) = self.artworks.get(index).cloned() else {
            return;
        };
        let was_checked = self.selection.contains(target.id);

        let mut checked: Vec<Artwork> = self
            .selection
            .checked_on(&self.artworks)
            .into_iter()
            .filter(|a| a.id != target.id)
            .cloned()
            .collect();
        if !was_checked {
            checked.push(target);
        }

        self.reconcile_page(&checked);
    }

    /// Toggle the header checkbox: check every row on the page, or uncheck
    /// them all if they are already checked.
    pub fn toggle_page(&mut self) {
        let checked = if self.is_page_checked() {
            Vec::new()
        } else {
            self.artworks.clone()
        };
        self.reconcile_page(&checked);
    }

    // ========================================================================
    // Bulk selection
    // ========================================================================

    /// Open the select-rows prompt.
    pub fn open_count_prompt(&mut self) {
        self.count_prompt_open = true;
    }

    /// Close the select-rows prompt.
    pub fn close_count_prompt(&mut self) {
        self.count_prompt_open = false;
    }

    /// Toggle the select-rows prompt.
    pub fn toggle_count_prompt(&mut self) {
        self.count_prompt_open = !self.count_prompt_open;
    }

    /// Whether the select-rows prompt is open.
    pub fn is_count_prompt_open(&self) -> bool {
        self.count_prompt_open
    }

    /// Validate a requested bulk-selection count.
    ///
    /// Zero and negative counts select nothing.
    pub fn bulk_target(requested: i64) -> Option<usize> {
        usize::try_from(requested).ok().filter(|n| *n > 0)
    }

    /// Insert the result of a bulk selection and close the prompt.
    pub fn apply_bulk_selection(&mut self, artworks: Vec<Artwork>) {
        info!(count = artworks.len(), "Applying bulk selection");
        self.selection.extend(artworks);
        self.count_prompt_open = false;
    }

    /// Select the first `requested` artworks of the catalog.
    ///
    /// Returns the number of artworks that were selected, which is lower than
    /// requested when pages fail to load.
    pub async fn bulk_select(&mut self, catalog: &dyn Catalog, requested: i64) -> usize {
        let Some(target) = Self::bulk_target(requested) else {
            debug!(requested, "Ignoring non-positive bulk selection");
            return 0;
        };

        let artworks = collect_first(catalog, target).await;
        let count = artworks.len();
        self.apply_bulk_selection(artworks);
        count
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the first `count` artworks of the catalog.
///
/// Pages are requested one at a time starting from the first page,
/// regardless of which page is on screen. A page that fails to load is
/// logged and skipped, so fewer than `count` artworks may come back. The
/// walk stops at the last page of the catalog, so a count larger than the
/// catalog selects everything.
pub async fn collect_first(catalog: &dyn Catalog, count: usize) -> Vec<Artwork> {
    let pages_needed = count.div_ceil(PAGE_SIZE);
    let mut fetched: Vec<Artwork> = Vec::with_capacity(count.min(PAGE_SIZE));

    for index in 0..pages_needed {
        let window = PageWindow::new(index);
        match catalog.fetch_page(window).await {
            Ok(page) => {
                let end_of_catalog =
                    (window.first() + window.size) as u64 >= page.pagination.total;
                fetched.extend(page.data);
                if fetched.len() >= count || end_of_catalog {
                    break;
                }
            }
            Err(e) => {
                warn!(page = window.api_page(), error = %e, "Error fetching page");
            }
        }
    }

    fetched.truncate(count);
    fetched
}
