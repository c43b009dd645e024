//! Catalog API client implementation.
//!
//! This module provides the client for the Art Institute of Chicago artworks
//! endpoint. Each call issues exactly one GET request; failures are returned
//! to the caller without retrying.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, Result};
use super::types::{ArtworkPage, PageWindow};
use crate::config::Settings;

/// Default catalog endpoint.
pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A paged source of artworks.
///
/// The selection controller only depends on this trait so that it can be
/// driven by the HTTP client in the application and by in-memory catalogs in
/// tests.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch one page of artworks.
    async fn fetch_page(&self, window: PageWindow) -> Result<ArtworkPage>;
}

/// The catalog API client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// The HTTP client.
    client: Client,
    /// The artworks endpoint.
    base_url: Url,
}

impl CatalogClient {
    /// Create a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { client, base_url })
    }

    /// Create a client from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.api_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// Build the request URL for a page window.
    ///
    /// The API numbers pages from 1, so window index `p` maps to `page=p+1`.
    pub fn page_url(&self, window: PageWindow) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &window.api_page().to_string())
            .append_pair("limit", &window.size.to_string());
        url
    }

    /// Perform a GET request and decode the JSON body.
    #[instrument(skip(self), fields(url = %url))]
    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response, checking for errors and parsing JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", error_body);

            Err(ApiError::from_status(status, &error_context(&url, &error_body)))
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    #[instrument(skip(self), fields(page = window.api_page()))]
    async fn fetch_page(&self, window: PageWindow) -> Result<ArtworkPage> {
        let url = self.page_url(window);
        debug!("Fetching artworks page");

        let page: ArtworkPage = self.get(url).await?;
        debug!(
            "Fetched {} artworks (total: {})",
            page.data.len(),
            page.pagination.total
        );
        Ok(page)
    }
}

/// Extract a readable context from an error body.
///
/// The catalog returns `{"status": ..., "error": ..., "detail": ...}` on
/// failures; fall back to the URL when the body is not in that shape.
fn error_context(url: &str, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }
    }
    url.to_string()
}

/// Normalize and parse the base URL, dropping trailing slashes and any
/// query string.
fn normalize_base_url(url: &str) -> Result<Url> {
    let trimmed = url.trim().trim_end_matches('/');

    if !trimmed.starts_with("https://") && !trimmed.contains("localhost") {
        warn!("URL does not use HTTPS: {}", trimmed);
    }

    let mut parsed =
        Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(trimmed.to_string()));
    }
    parsed.set_query(None);
    Ok(parsed)
}
