use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::error::{SourceError, SourceResult};
use super::provider::SheetSource;
use crate::board::rows::grid_from_json;
use crate::board::RawTables;

/// Tabs (A1 range names) to pull from the spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetRanges {
    pub predictions: String,
    pub cover_analysis: String,
    pub results: Option<String>,
}

/// Client for the Google Sheets v4 `values` API.
#[derive(Clone)]
pub struct GoogleSheetsClient {
    http: Client,
    api_url: String,
    sheet_id: String,
    ranges: SheetRanges,
    api_key: Option<String>,
    access_token: Option<String>,
}

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`. `values` is omitted
/// entirely when the range is empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    range: String,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl GoogleSheetsClient {
    pub fn new(
        api_url: &str,
        sheet_id: &str,
        ranges: SheetRanges,
        api_key: Option<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> SourceResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(GoogleSheetsClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            sheet_id: sheet_id.to_string(),
            ranges,
            api_key,
            access_token,
        })
    }

    /// URL for one range. The range name is a single path segment, so tab
    /// names with spaces ("Cover Analysis") are percent-encoded.
    fn values_url(&self, range: &str) -> SourceResult<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| SourceError::BaseUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.sheet_id.as_str(), "values", range]);
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    /// Fetch one range as a grid of cell strings.
    pub async fn fetch_range(&self, range: &str) -> SourceResult<Vec<Vec<String>>> {
        let url = self.values_url(range)?;
        debug!("Fetching sheet range '{}'", range);

        let mut req = self.http.get(url);
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                range: range.to_string(),
                status,
                body,
            });
        }

        let body = resp.text().await?;
        let parsed: ValueRange = serde_json::from_str(&body)?;
        debug!("Range '{}' returned {} rows", parsed.range, parsed.values.len());
        Ok(grid_from_json(&parsed.values))
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    fn name(&self) -> &str {
        "GoogleSheets"
    }

    async fn fetch_tables(&self) -> SourceResult<RawTables> {
        let results_fut = async {
            match &self.ranges.results {
                Some(range) => Some((range.as_str(), self.fetch_range(range).await)),
                None => None,
            }
        };

        let (predictions, cover_analysis, results) = futures_util::future::join3(
            self.fetch_range(&self.ranges.predictions),
            self.fetch_range(&self.ranges.cover_analysis),
            results_fut,
        )
        .await;

        // The results tab is optional.
        let results = match results {
            Some((_, Ok(grid))) => Some(grid),
            Some((range, Err(e))) => {
                warn!("Optional range '{}' unavailable: {}", range, e);
                None
            }
            None => None,
        };

        let tables = RawTables {
            predictions: predictions?,
            cover_analysis: cover_analysis?,
            results,
        };
        info!(
            "Fetched sheet {}: {} prediction rows, {} cover rows",
            self.sheet_id,
            tables.predictions.len(),
            tables.cover_analysis.len()
        );
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;

    fn ranges(results: Option<&str>) -> SheetRanges {
        SheetRanges {
            predictions: "Predictions".into(),
            cover_analysis: "Cover Analysis".into(),
            results: results.map(str::to_string),
        }
    }

    fn client(api_url: &str, results: Option<&str>) -> GoogleSheetsClient {
        GoogleSheetsClient::new(
            api_url,
            "sheet123",
            ranges(results),
            Some("k-1".into()),
            Some("tok".into()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_values_url_encodes_range() {
        let c = client("https://sheets.googleapis.com/", None);
        let url = c.values_url("Cover Analysis").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/Cover%20Analysis?key=k-1"
        );
    }

    #[test]
    fn test_value_range_without_values() {
        let parsed: ValueRange =
            serde_json::from_str(r#"{"range":"Predictions!A1:Z1000"}"#).unwrap();
        assert!(parsed.values.is_empty());
    }

    async fn fake_values(
        Path((sheet, range)): Path<(String, String)>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, StatusCode> {
        let authed =
            headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer tok");
        let keyed = query.get("key").map(String::as_str) == Some("k-1");
        if sheet != "sheet123" || !keyed || !authed {
            return Err(StatusCode::FORBIDDEN);
        }
        let values = match range.as_str() {
            "Predictions" => serde_json::json!([
                ["Matchup", "Line", "Edge"],
                ["A vs B", 3, "4"]
            ]),
            "Cover Analysis" => serde_json::json!([["t"], [], [], ["Game", "Our Bet", "Result"]]),
            _ => return Err(StatusCode::NOT_FOUND),
        };
        Ok(Json(serde_json::json!({ "range": range, "values": values })))
    }

    async fn spawn_fake_api() -> String {
        let app = Router::new().route(
            "/v4/spreadsheets/:sheet/values/:range",
            get(fake_values),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_tables_from_api() {
        let base = spawn_fake_api().await;
        let tables = client(&base, None).fetch_tables().await.unwrap();
        assert_eq!(tables.predictions[1], vec!["A vs B", "3", "4"]);
        assert_eq!(tables.cover_analysis.len(), 4);
        assert!(tables.results.is_none());
    }

    #[tokio::test]
    async fn test_missing_optional_range_is_skipped() {
        let base = spawn_fake_api().await;
        let tables = client(&base, Some("Results")).fetch_tables().await.unwrap();
        assert!(tables.results.is_none());
        assert_eq!(tables.predictions.len(), 2);
    }

    #[tokio::test]
    async fn test_status_error_surfaces() {
        let base = spawn_fake_api().await;
        let c = client(&base, None);
        let err = c.fetch_range("Nope").await.unwrap_err();
        match err {
            SourceError::Status { status, range, .. } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(range, "Nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
