use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::board::DEFAULT_MIN_EDGE;

/// Spread-edge betting dashboard backed by a Google Sheets prediction model
#[derive(Parser, Debug, Clone)]
#[command(name = "edge-dashboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// Google spreadsheet ID holding the prediction tabs
    #[arg(long, env = "SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Google Sheets API base URL
    #[arg(
        long,
        env = "SHEETS_API_URL",
        default_value = "https://sheets.googleapis.com"
    )]
    pub sheets_api_url: String,

    /// API key for sheets shared publicly ("anyone with the link")
    #[arg(long, env = "SHEETS_API_KEY")]
    pub sheets_api_key: Option<String>,

    /// OAuth access token for private sheets
    #[arg(long, env = "SHEETS_ACCESS_TOKEN")]
    pub sheets_access_token: Option<String>,

    /// Local file holding an access token, read when SHEETS_ACCESS_TOKEN is unset
    #[arg(long, env = "SHEETS_ACCESS_TOKEN_FILE")]
    pub sheets_access_token_file: Option<PathBuf>,

    /// Predictions tab name
    #[arg(long, env = "PREDICTIONS_RANGE", default_value = "Predictions")]
    pub predictions_range: String,

    /// Cover analysis tab name
    #[arg(long, env = "COVER_RANGE", default_value = "Cover Analysis")]
    pub cover_range: String,

    /// 1-based row of the cover analysis header (rows above are a summary block)
    #[arg(long, env = "COVER_HEADER_ROW", default_value = "4")]
    pub cover_header_row: usize,

    /// Optional results tab shown verbatim on the Results tab
    #[arg(long, env = "RESULTS_RANGE")]
    pub results_range: Option<String>,

    /// Serve a local JSON snapshot instead of calling the Sheets API
    #[arg(long, env = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Default minimum edge (points) for a bet recommendation
    #[arg(long, env = "MIN_EDGE", default_value_t = DEFAULT_MIN_EDGE)]
    pub min_edge: f64,

    /// How long a fetched snapshot is served before refetching (0 = always fetch)
    #[arg(long, env = "CACHE_TTL_SECS", default_value = "300")]
    pub cache_ttl_secs: u64,

    /// HTTP timeout for Sheets API calls
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.data_file.is_none() && self.sheet_id.is_none() {
            anyhow::bail!("SHEET_ID is required unless --data-file is given");
        }
        if self.data_file.is_none()
            && self.sheets_api_key.is_none()
            && self.sheets_access_token.is_none()
            && self.sheets_access_token_file.is_none()
        {
            anyhow::bail!(
                "Sheets API needs SHEETS_API_KEY, SHEETS_ACCESS_TOKEN or SHEETS_ACCESS_TOKEN_FILE"
            );
        }
        if self.cover_header_row == 0 {
            anyhow::bail!("cover_header_row is 1-based and must be at least 1");
        }
        if !self.min_edge.is_finite() || self.min_edge < 0.0 {
            anyhow::bail!("min_edge must be a non-negative number");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be positive");
        }
        Ok(())
    }

    /// 0-based index of the cover analysis header row.
    pub fn cover_header_index(&self) -> usize {
        self.cover_header_row.saturating_sub(1)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Access token from the environment, falling back to the token file.
    pub fn resolve_access_token(&self) -> anyhow::Result<Option<String>> {
        if let Some(token) = &self.sheets_access_token {
            return Ok(Some(token.trim().to_string()));
        }
        match &self.sheets_access_token_file {
            Some(path) => {
                let token = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read access token file {}", path.display())
                })?;
                let token = token.trim().to_string();
                if token.is_empty() {
                    anyhow::bail!("Access token file {} is empty", path.display());
                }
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["edge-dashboard"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let c = parse(&["--data-file", "snap.json"]);
        assert_eq!(c.predictions_range, "Predictions");
        assert_eq!(c.cover_range, "Cover Analysis");
        assert_eq!(c.cover_header_index(), 3);
        assert_eq!(c.min_edge, DEFAULT_MIN_EDGE);
        assert_eq!(c.cache_ttl(), Duration::from_secs(300));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_sheet_id_required_without_file() {
        let c = parse(&["--sheets-api-key", "k"]);
        assert!(c.validate().is_err());
        let c = parse(&["--sheet-id", "abc", "--sheets-api-key", "k"]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_credentials_required_for_api() {
        let c = parse(&["--sheet-id", "abc"]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--data-file", "x", "--min-edge=-1"]).validate().is_err());
        assert!(parse(&["--data-file", "x", "--cover-header-row", "0"]).validate().is_err());
    }

    #[test]
    fn test_token_file_fallback() {
        let path =
            std::env::temp_dir().join(format!("edge-dashboard-token-{}", std::process::id()));
        std::fs::write(&path, "  ya29.token\n").unwrap();

        let c = parse(&[
            "--sheet-id",
            "abc",
            "--sheets-access-token-file",
            path.to_str().unwrap(),
        ]);
        assert_eq!(c.resolve_access_token().unwrap().as_deref(), Some("ya29.token"));

        let c = parse(&[
            "--sheet-id",
            "abc",
            "--sheets-access-token",
            "direct",
            "--sheets-access-token-file",
            path.to_str().unwrap(),
        ]);
        assert_eq!(c.resolve_access_token().unwrap().as_deref(), Some("direct"));

        let _ = std::fs::remove_file(&path);
    }
}
