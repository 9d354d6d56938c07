use thiserror::Error;

/// Errors produced by the JSON helpers and configuration loading.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias for JSON helper results.
pub type JsonResult<T> = Result<T, JsonError>;
