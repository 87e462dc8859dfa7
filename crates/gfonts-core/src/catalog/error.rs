//! Fatal catalog errors. Each one ends the whole invocation.

/// Error from fetching the catalog or resolving a family's files.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to fetch the font catalog (HTTP {status}); the access token may be missing or invalid")]
    CatalogRejected { status: u32 },

    #[error("font family `{0}` not found in the catalog")]
    FamilyNotFound(String),

    #[error("failed to get download urls for `{0}`: listing not found")]
    ListingNotFound(String),

    #[error("listing for `{family}` was rejected (HTTP {status}): {message}")]
    ListingRejected {
        family: String,
        status: u32,
        message: String,
    },

    #[error("font family `{0}` has no .ttf files to download")]
    NoFontFiles(String),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("unexpected response from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
