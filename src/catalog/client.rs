// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote catalog service.
//!
//! Thin wrapper around `reqwest` that owns the base URL and exposes one async
//! method per endpoint family. All methods are read-only; failures surface as
//! [`Error`](crate::error::Error) values and are handled (logged, degraded)
//! at the call site in the update loop.

use crate::catalog::{Category, Product, SiteConfig};
use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CatalogClient {
    /// Creates a client for the given base address. A trailing slash on
    /// `base_url` is stripped so paths can be joined uniformly.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("CardGallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base address, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a possibly relative URL (e.g. `/media/site/logo.png`) against
    /// the base address. Absolute URLs pass through unchanged.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /api/config/`
    pub async fn fetch_site_config(&self) -> Result<SiteConfig> {
        self.get_json("/api/config/").await
    }

    /// `GET /api/categories/`
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/api/categories/").await
    }

    /// `GET /api/products/?featured=true`
    pub async fn fetch_featured_products(&self) -> Result<Vec<Product>> {
        self.get_json("/api/products/?featured=true").await
    }

    /// `GET /api/products/?category=<slug>`
    pub async fn fetch_products_by_category(&self, slug: &str) -> Result<Vec<Product>> {
        self.get_json(&format!("/api/products/?category={slug}"))
            .await
    }

    /// Fetches raw image bytes from an absolute or base-relative URL.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.absolute_url(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.absolute_url(path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("{url}: HTTP status {status}")));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = CatalogClient::new("http://catalog.local:8000/");
        assert_eq!(client.base_url(), "http://catalog.local:8000");
    }

    #[test]
    fn absolute_url_joins_relative_paths() {
        let client = CatalogClient::new("http://catalog.local:8000");
        assert_eq!(
            client.absolute_url("/media/site/logo.png"),
            "http://catalog.local:8000/media/site/logo.png"
        );
        assert_eq!(
            client.absolute_url("api/categories/"),
            "http://catalog.local:8000/api/categories/"
        );
    }

    #[test]
    fn absolute_url_passes_through_absolute_urls() {
        let client = CatalogClient::new("http://catalog.local:8000");
        let cdn = "https://cdn.example.com/a.jpg";
        assert_eq!(client.absolute_url(cdn), cdn);
    }
}
