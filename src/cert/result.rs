use serde::{Deserialize, Serialize};

pub const NO_CERTIFICATES_MESSAGE: &str = "The user has not completed any courses yet.";

/// Lookup outcome. Serialized as `{"status": "success", "certificate_urls": [...]}`
/// or `{"status": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CertificateUrlResult {
    Success { certificate_urls: Vec<String> },
    Error { message: String },
}

impl CertificateUrlResult {
    pub fn success(certificate_urls: Vec<String>) -> Self {
        Self::Success { certificate_urls }
    }

    pub fn no_certificates() -> Self {
        Self::Error {
            message: NO_CERTIFICATES_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn certificate_urls(&self) -> &[String] {
        match self {
            Self::Success { certificate_urls } => certificate_urls.as_slice(),
            Self::Error { .. } => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message.as_str()),
        }
    }
}
