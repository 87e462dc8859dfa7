//! Catalog client for the font repository's contents API.
//!
//! Two-stage traversal: the catalog lists one directory per family; each
//! family listing is filtered down to `.ttf` files with direct download URLs.
//! All calls are blocking and sequential.

mod error;
mod filter;
mod types;

pub use error::CatalogError;
pub use filter::{is_font_path, FONT_EXTENSION};
pub use types::{FontFamilyEntry, FontFileEntry};

use crate::http;
use std::time::Duration;
use types::ListingBody;

/// Where the catalog lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Root of the repository contents API.
    pub api_base: String,
    /// Catalog directory (e.g. `ofl`).
    pub collection: String,
    /// Ref used for listing URLs built from a family name.
    pub git_ref: String,
    pub connect_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com/repos/google/fonts/contents".to_string(),
            collection: "ofl".to_string(),
            git_ref: "main".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ApiSettings {
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    /// Listing URL for `family` built from its name, bypassing the catalog.
    pub fn family_url(&self, family: &str) -> String {
        format!("{}/{}?ref={}", self.catalog_url(), family, self.git_ref)
    }
}

/// Pure projection of the family names, in catalog order.
pub fn list_family_names(catalog: &[FontFamilyEntry]) -> Vec<String> {
    catalog.iter().map(|f| f.name.clone()).collect()
}

/// Blocking client for the catalog and family listings.
///
/// The access token is fixed at construction; the client never reads the
/// environment.
#[derive(Clone)]
pub struct CatalogClient {
    settings: ApiSettings,
    token: Option<String>,
}

impl CatalogClient {
    pub fn new(settings: ApiSettings, token: Option<String>) -> Self {
        Self { settings, token }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn api_headers(&self) -> Vec<String> {
        let mut headers = vec!["Accept: application/vnd.github+json".to_string()];
        if let Some(token) = &self.token {
            headers.push(format!("Authorization: token {}", token.trim()));
        }
        headers
    }

    fn get(&self, url: &str) -> Result<http::Response, CatalogError> {
        http::get(url, &self.api_headers(), self.settings.connect_timeout).map_err(|source| {
            CatalogError::Transport {
                url: url.to_string(),
                source,
            }
        })
    }

    /// Fetches every family entry of the catalog. A non-2xx answer is fatal and
    /// never retried.
    pub fn fetch_catalog(&self) -> Result<Vec<FontFamilyEntry>, CatalogError> {
        let url = self.settings.catalog_url();
        tracing::info!(url = %url, authenticated = self.has_token(), "fetching font catalog");
        let response = self.get(&url)?;
        if !response.is_success() {
            tracing::error!(url = %url, status = response.status, "catalog request rejected");
            return Err(CatalogError::CatalogRejected {
                status: response.status,
            });
        }
        let catalog: Vec<FontFamilyEntry> = serde_json::from_slice(&response.body)
            .map_err(|source| CatalogError::Malformed { url, source })?;
        tracing::info!(families = catalog.len(), "fetched font catalog");
        Ok(catalog)
    }

    /// Resolves the `.ttf` files of `family` to filenames and download URLs.
    ///
    /// Without `force`, `family` must appear in `catalog`; the check happens
    /// before any request. With `force`, the listing URL is built from the name
    /// and `catalog` is not consulted. An empty result is an error.
    pub fn resolve_downloads_for_family(
        &self,
        catalog: &[FontFamilyEntry],
        family: &str,
        force: bool,
    ) -> Result<Vec<FontFileEntry>, CatalogError> {
        let url = if force {
            self.settings.family_url(family)
        } else {
            catalog
                .iter()
                .find(|f| f.name == family)
                .map(|f| f.api_url.clone())
                .ok_or_else(|| CatalogError::FamilyNotFound(family.to_string()))?
        };

        tracing::info!(family, url = %url, force, "fetching family listing");
        let response = self.get(&url)?;
        let body: ListingBody = serde_json::from_slice(&response.body).map_err(|source| {
            CatalogError::Malformed {
                url: url.clone(),
                source,
            }
        })?;

        let entries = match body {
            ListingBody::Entries(entries) => entries,
            ListingBody::Error(err) => {
                if err.status.as_deref() == Some("404") || response.status == 404 {
                    return Err(CatalogError::ListingNotFound(family.to_string()));
                }
                return Err(CatalogError::ListingRejected {
                    family: family.to_string(),
                    status: response.status,
                    message: err.message.unwrap_or_default(),
                });
            }
        };

        let listed = entries.len();
        let files = filter::font_files(entries);
        tracing::debug!(family, listed, fonts = files.len(), "filtered family listing");
        if files.is_empty() {
            return Err(CatalogError::NoFontFiles(family.to_string()));
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(name: &str) -> FontFamilyEntry {
        FontFamilyEntry {
            name: name.to_string(),
            api_url: format!("https://api.example.com/ofl/{name}?ref=main"),
        }
    }

    #[test]
    fn family_names_keep_order() {
        let catalog = vec![family("zilla"), family("abeezee"), family("lato")];
        assert_eq!(list_family_names(&catalog), vec!["zilla", "abeezee", "lato"]);
        assert!(list_family_names(&[]).is_empty());
    }

    #[test]
    fn default_urls() {
        let s = ApiSettings::default();
        assert_eq!(
            s.catalog_url(),
            "https://api.github.com/repos/google/fonts/contents/ofl"
        );
        assert_eq!(
            s.family_url("abeezee"),
            "https://api.github.com/repos/google/fonts/contents/ofl/abeezee?ref=main"
        );
    }

    #[test]
    fn trailing_slash_in_base_ignored() {
        let s = ApiSettings {
            api_base: "http://127.0.0.1:1/contents/".to_string(),
            ..ApiSettings::default()
        };
        assert_eq!(s.catalog_url(), "http://127.0.0.1:1/contents/ofl");
    }

    #[test]
    fn unknown_family_rejected_before_any_request() {
        // Unroutable base: any request would fail with a transport error.
        let client = CatalogClient::new(
            ApiSettings {
                api_base: "http://127.0.0.1:9/none".to_string(),
                ..ApiSettings::default()
            },
            None,
        );
        let err = client
            .resolve_downloads_for_family(&[family("abeezee")], "missing", false)
            .unwrap_err();
        assert!(matches!(err, CatalogError::FamilyNotFound(ref n) if n == "missing"));
    }

    #[test]
    fn token_goes_into_authorization_header() {
        let client = CatalogClient::new(ApiSettings::default(), Some("abc123".to_string()));
        assert!(client
            .api_headers()
            .contains(&"Authorization: token abc123".to_string()));
        let anonymous = CatalogClient::new(ApiSettings::default(), None);
        assert!(!anonymous
            .api_headers()
            .iter()
            .any(|h| h.starts_with("Authorization")));
    }
}
