//! Catalog and listing entries as returned by the contents API.

use serde::{Deserialize, Serialize};

/// One family directory in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilyEntry {
    pub name: String,
    /// Contents API URL of the family's own listing.
    #[serde(rename = "url")]
    pub api_url: String,
}

/// A font file ready for transfer: decoded filename plus direct download URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFileEntry {
    pub name: String,
    pub download_url: String,
}

/// One entry of a family listing. Directories have no download URL.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentEntry {
    pub path: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Error object the API returns instead of a listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A family listing is either an array of entries or an error object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListingBody {
    Entries(Vec<ContentEntry>),
    Error(ApiErrorBody),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_entry_from_catalog_json() {
        let json = r#"[{
            "name": "abeezee",
            "path": "ofl/abeezee",
            "sha": "83498679c7af31b3e2f28d05e812f6f81c9fe4f6",
            "size": 0,
            "url": "https://api.github.com/repos/google/fonts/contents/ofl/abeezee?ref=main",
            "html_url": "https://github.com/google/fonts/tree/main/ofl/abeezee",
            "download_url": null,
            "type": "dir"
        }]"#;
        let entries: Vec<FontFamilyEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "abeezee");
        assert_eq!(
            entries[0].api_url,
            "https://api.github.com/repos/google/fonts/contents/ofl/abeezee?ref=main"
        );
    }

    #[test]
    fn listing_array_parsed_as_entries() {
        let json = r#"[
            {"name": "ABeeZee-Italic.ttf", "path": "ofl/abeezee/ABeeZee-Italic.ttf",
             "download_url": "https://raw.githubusercontent.com/google/fonts/main/ofl/abeezee/ABeeZee-Italic.ttf",
             "type": "file"},
            {"name": "static", "path": "ofl/abeezee/static", "download_url": null, "type": "dir"}
        ]"#;
        match serde_json::from_str::<ListingBody>(json).unwrap() {
            ListingBody::Entries(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(entries[1].download_url.is_none());
            }
            ListingBody::Error(_) => panic!("expected entries"),
        }
    }

    #[test]
    fn not_found_object_parsed_as_error() {
        let json = r#"{"message": "Not Found",
            "documentation_url": "https://docs.github.com/rest",
            "status": "404"}"#;
        match serde_json::from_str::<ListingBody>(json).unwrap() {
            ListingBody::Error(body) => {
                assert_eq!(body.status.as_deref(), Some("404"));
                assert_eq!(body.message.as_deref(), Some("Not Found"));
            }
            ListingBody::Entries(_) => panic!("expected error object"),
        }
    }
}
