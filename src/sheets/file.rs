use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use super::error::{SourceError, SourceResult};
use super::provider::SheetSource;
use crate::board::rows::grid_from_json;
use crate::board::RawTables;

/// Sheet source backed by a local JSON snapshot, for offline use.
///
/// The file holds the raw grids exactly as the Sheets API returns them:
///
/// ```json
/// { "predictions": [["Matchup", ...], ...],
///   "coverAnalysis": [["Cover Analysis"], ..., ["Game", "Our Bet", "Result"], ...],
///   "results": [["Week", ...], ...] }
/// ```
pub struct JsonFileSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    #[serde(default)]
    predictions: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    cover_analysis: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    results: Option<Vec<Vec<serde_json::Value>>>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }
}

#[async_trait]
impl SheetSource for JsonFileSource {
    fn name(&self) -> &str {
        "JsonFile"
    }

    async fn fetch_tables(&self) -> SourceResult<RawTables> {
        debug!("Reading sheet snapshot from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let snapshot: SnapshotFile = serde_json::from_str(&raw)?;

        Ok(RawTables {
            predictions: grid_from_json(&snapshot.predictions),
            cover_analysis: grid_from_json(&snapshot.cover_analysis),
            results: snapshot.results.as_deref().map(grid_from_json),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("edge-dashboard-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_reads_snapshot() {
        let path = temp_path("snapshot");
        let body = serde_json::json!({
            "predictions": [["Matchup", "Line"], ["A vs B", 3.5]],
            "coverAnalysis": [["Game", "Our Bet", "Result"]]
        });
        tokio::fs::write(&path, body.to_string()).await.unwrap();

        let tables = JsonFileSource::new(&path).fetch_tables().await.unwrap();
        assert_eq!(tables.predictions[1], vec!["A vs B", "3.5"]);
        assert_eq!(tables.cover_analysis.len(), 1);
        assert!(tables.results.is_none());

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = JsonFileSource::new(temp_path("missing"))
            .fetch_tables()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let path = temp_path("malformed");
        tokio::fs::write(&path, "{ not json").await.unwrap();
        let err = JsonFileSource::new(&path).fetch_tables().await.unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
        let _ = tokio::fs::remove_file(&path).await;
    }
}
