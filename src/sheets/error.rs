use thiserror::Error;

/// Failure to obtain sheet data for one refresh.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API error {status} for range '{range}': {body}")]
    Status {
        range: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sheet URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Sheets API URL cannot take path segments: {0}")]
    BaseUrl(String),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
