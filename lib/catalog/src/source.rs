use crate::error::Result;
use crate::extract::extract_candidates;
use crate::snapshot::Snapshot;
use camsim_core::RawCandidate;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Where the reference catalog comes from
///
/// Candidate records are extracted fresh on every call; nothing extracted is
/// kept between calls.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A snapshot held in memory
    Snapshot(Arc<Snapshot>),
    /// Fetched from a MediaWiki parse endpoint on every call
    Remote { client: reqwest::Client, url: String },
}

impl CatalogSource {
    pub fn snapshot(snapshot: Snapshot) -> Self {
        CatalogSource::Snapshot(Arc::new(snapshot))
    }

    /// A remote source whose fetches give up after `timeout`
    pub fn remote(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(CatalogSource::Remote {
            client,
            url: url.into(),
        })
    }

    /// Raw candidate records, in catalog order
    pub async fn candidates(&self) -> Result<Vec<RawCandidate>> {
        let candidates = match self {
            CatalogSource::Snapshot(snapshot) => extract_candidates(snapshot.html())?,
            CatalogSource::Remote { client, url } => {
                let snapshot = Snapshot::download(client, url).await.map_err(|e| {
                    warn!(url = %url, error = %e, "catalog fetch failed");
                    e
                })?;
                extract_candidates(snapshot.html())?
            }
        };
        debug!(count = candidates.len(), "extracted catalog candidates");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_snapshot_candidates() {
        let source = CatalogSource::snapshot(Snapshot::bundled().unwrap());
        let first = source.candidates().await.unwrap();
        let second = source.candidates().await.unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first.iter().any(|c| c.id == "0ver Zer0"));
    }

    #[test]
    fn test_remote_source_builds() {
        let source = CatalogSource::remote("http://localhost:1/api.php", Duration::from_secs(1)).unwrap();
        assert!(matches!(source, CatalogSource::Remote { .. }));
    }
}
