#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Profile unavailable for {symbol}: {reason}")]
    ProfileUnavailable { symbol: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
