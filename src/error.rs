use thiserror::Error;

/// nmd統一エラー型
#[derive(Debug, Error)]
pub enum NmdError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unsplash API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Unknown continent: {0}. Expected 'all', 'asia', 'europe', 'north-america', 'south-america', 'africa' or 'oceania'")]
    UnknownContinent(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("No search result for: {0}")]
    NoSearchResult(String),

    #[error("Unsplash access key not set. Export UNSPLASH_ACCESS_KEY or pass --access-key")]
    MissingAccessKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NmdError>;

impl NmdError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            NmdError::Network(_) => true,
            NmdError::Api { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}
