//! Catalog API client and types.
//!
//! This module provides the interface for fetching artwork pages from the
//! Art Institute of Chicago REST API.

mod client;
pub mod error;
pub mod types;

pub use client::{Catalog, CatalogClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use types::{Artwork, ArtworkId, ArtworkPage, PageWindow, PAGE_SIZE};

#[cfg(test)]
pub(crate) mod testing;
