//! In-memory catalog for tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::client::Catalog;
use super::error::{ApiError, Result};
use super::types::{Artwork, ArtworkPage, PageWindow, Pagination};

/// A catalog of `total` artworks with IDs `1..=total`.
///
/// Records every requested window and fails the API pages listed in
/// `failing_pages`.
pub struct FakeCatalog {
    total: u64,
    failing_pages: HashSet<usize>,
    requests: Mutex<Vec<usize>>,
}

impl FakeCatalog {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            failing_pages: HashSet::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail requests for the given 1-based API page.
    pub fn failing_page(mut self, api_page: usize) -> Self {
        self.failing_pages.insert(api_page);
        self
    }

    /// The 1-based API pages requested so far, in order.
    pub fn requested_pages(&self) -> Vec<usize> {
        self.requests.lock().unwrap().clone()
    }

    /// The page the catalog would return for a window.
    pub fn page(&self, window: PageWindow) -> ArtworkPage {
        let start = window.first() as u64;
        let end = (start + window.size as u64).min(self.total);
        let data = (start..end)
            .map(|offset| artwork(offset + 1))
            .collect();

        ArtworkPage {
            data,
            pagination: Pagination {
                total: self.total,
                limit: Some(window.size as u64),
                offset: Some(start),
                total_pages: None,
                current_page: Some(window.api_page() as u64),
            },
        }
    }
}

/// A test artwork with a predictable title.
pub fn artwork(id: u64) -> Artwork {
    Artwork::new(id, format!("Artwork {}", id))
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn fetch_page(&self, window: PageWindow) -> Result<ArtworkPage> {
        self.requests.lock().unwrap().push(window.api_page());

        if self.failing_pages.contains(&window.api_page()) {
            return Err(ApiError::ServerError(format!(
                "HTTP 503: page {}",
                window.api_page()
            )));
        }

        Ok(self.page(window))
    }
}
