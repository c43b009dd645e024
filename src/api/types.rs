//! Catalog API data types.
//!
//! These types map to the JSON payloads returned by the Art Institute of
//! Chicago artworks endpoint.

use serde::{Deserialize, Serialize};

/// Number of records requested per page.
pub const PAGE_SIZE: usize = 10;

/// The unique key of an artwork.
pub type ArtworkId = u64;

/// A single artwork record.
///
/// Only `id` carries meaning for the viewer; the remaining fields are
/// display attributes and may be missing or `null` in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// The artwork ID.
    pub id: ArtworkId,
    /// The artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Where the artwork was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist name and biography line.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the artwork.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year work on the artwork started.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year work on the artwork finished.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Create an artwork with only an ID and title.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Get the title, or an empty string if missing.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Get the public web page for this artwork.
    pub fn web_url(&self) -> String {
        format!("https://www.artic.edu/artworks/{}", self.id)
    }
}

/// Pagination metadata returned alongside a page of artworks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records across all pages.
    pub total: u64,
    /// Records per page echoed by the server.
    #[serde(default)]
    pub limit: Option<u64>,
    /// Offset of the first record on this page.
    #[serde(default)]
    pub offset: Option<u64>,
    /// Total number of pages as computed by the server.
    #[serde(default)]
    pub total_pages: Option<u64>,
    /// The 1-based page number of this response.
    #[serde(default)]
    pub current_page: Option<u64>,
}

/// One page of artworks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// The artworks on this page.
    #[serde(default)]
    pub data: Vec<Artwork>,
    /// Pagination information.
    pub pagination: Pagination,
}

/// A (page index, page size) pair describing which slice of the catalog to
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// The 0-based page index.
    pub index: usize,
    /// The number of records per page.
    pub size: usize,
}

impl PageWindow {
    /// Create a window for the given page index with the fixed page size.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            size: PAGE_SIZE,
        }
    }

    /// The 1-based page number sent to the API.
    pub fn api_page(&self) -> usize {
        self.index + 1
    }

    /// The offset of the first record in this window.
    pub fn first(&self) -> usize {
        self.index * self.size
    }
}

/// Number of pages needed to show `total` records, never less than one.
pub fn page_count(total: u64) -> usize {
    let pages = total.div_ceil(PAGE_SIZE as u64);
    usize::try_from(pages).unwrap_or(usize::MAX).max(1)
}
