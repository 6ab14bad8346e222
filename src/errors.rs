use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// A required configuration value is missing; the payload is the key name.
    #[error("{0} not configured")]
    ConfigError(String),

    #[error("Failed to parse request or response: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        BackendError::ParseError(error.to_string())
    }
}
