use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Catalog returned status {status} for {url}")]
    CatalogStatus { status: u16, url: String },

    #[error("Unknown vehicle make id: {make_id}")]
    UnknownMake { make_id: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl QuoteError {
    /// Input the caller can fix, as opposed to an environment failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            QuoteError::ValidationError { .. }
                | QuoteError::UnknownMake { .. }
                | QuoteError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
