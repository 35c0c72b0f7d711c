//! MediaWiki parse snapshots of the player camera settings page
//!
//! A snapshot is the JSON document returned by the MediaWiki `action=parse`
//! API. Its title and page id are checked on load: if either changed, the
//! table inside is probably not the one the extractor understands.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Title of the catalog page
pub const EXPECTED_TITLE: &str = "List of player camera settings";

/// Page id of the catalog page
pub const EXPECTED_PAGE_ID: u64 = 2448;

/// MediaWiki parse API endpoint for the catalog page
pub const DEFAULT_CATALOG_URL: &str = "https://liquipedia.net/rocketleague/api.php?page=List_of_player_camera_settings&format=json&formatversion=2&utf8=true&action=parse&prop=text";

const BUNDLED_SNAPSHOT: &str = include_str!("../assets/list_of_player_camera_settings.json");

/// The parsed page, `{ "parse": { "title", "pageid", "text" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    parse: ParsedPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ParsedPage {
    title: String,
    pageid: u64,
    text: String,
}

impl Snapshot {
    /// Parse and check a snapshot document
    pub fn parse(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.check()?;
        Ok(snapshot)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let snapshot = Self::parse(&json)?;
        info!(path = %path.display(), "loaded catalog snapshot");
        Ok(snapshot)
    }

    /// The snapshot compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_SNAPSHOT)
    }

    /// Fetch a snapshot from a MediaWiki parse endpoint
    pub async fn download(client: &reqwest::Client, url: &str) -> Result<Self> {
        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let snapshot = Self::parse(&body)?;
        info!(url, "downloaded catalog snapshot");
        Ok(snapshot)
    }

    pub fn title(&self) -> &str {
        &self.parse.title
    }

    pub fn page_id(&self) -> u64 {
        self.parse.pageid
    }

    /// Rendered HTML of the page
    pub fn html(&self) -> &str {
        &self.parse.text
    }

    fn check(&self) -> Result<()> {
        if self.parse.title != EXPECTED_TITLE {
            return Err(CatalogError::UnexpectedTitle {
                expected: EXPECTED_TITLE,
                found: self.parse.title.clone(),
            });
        }
        if self.parse.pageid != EXPECTED_PAGE_ID {
            return Err(CatalogError::UnexpectedPageId {
                expected: EXPECTED_PAGE_ID,
                found: self.parse.pageid,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn document(title: &str, pageid: u64) -> String {
        json!({
            "parse": {
                "title": title,
                "pageid": pageid,
                "text": "<div class=\"mw-parser-output\"></div>"
            }
        })
        .to_string()
    }

    #[test]
    fn test_bundled_snapshot_parses() {
        let snapshot = Snapshot::bundled().unwrap();
        assert_eq!(snapshot.title(), EXPECTED_TITLE);
        assert_eq!(snapshot.page_id(), EXPECTED_PAGE_ID);
        assert!(snapshot.html().contains("mw-parser-output"));
    }

    #[test]
    fn test_unexpected_title() {
        let result = Snapshot::parse(&document("Some other page", EXPECTED_PAGE_ID));
        assert!(matches!(result, Err(CatalogError::UnexpectedTitle { .. })));
    }

    #[test]
    fn test_unexpected_page_id() {
        let result = Snapshot::parse(&document(EXPECTED_TITLE, 1));
        assert!(matches!(
            result,
            Err(CatalogError::UnexpectedPageId { found: 1, .. })
        ));
    }

    #[test]
    fn test_missing_text_rejected() {
        let json = json!({ "parse": { "title": EXPECTED_TITLE, "pageid": EXPECTED_PAGE_ID } });
        assert!(matches!(
            Snapshot::parse(&json.to_string()),
            Err(CatalogError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(document(EXPECTED_TITLE, EXPECTED_PAGE_ID).as_bytes())
            .unwrap();

        let snapshot = Snapshot::load_from_path(file.path()).unwrap();
        assert_eq!(snapshot.html(), "<div class=\"mw-parser-output\"></div>");
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::load_from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
