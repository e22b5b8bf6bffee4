use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertificateApiError {
    /// Request parameters were rejected; surfaced to callers as `invalid_parameter_exception`
    #[error("Invalid parameter value detected: {0}")]
    InvalidParameter(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CertificateApiError {
    /// Human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::InvalidParameter(msg) | Self::Storage(msg) | Self::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

pub type Result<T> = std::result::Result<T, CertificateApiError>;
