use crate::utils::errors::CertificateApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error body in the host platform's web service exception format
#[derive(Debug, Serialize)]
pub struct ExceptionBody {
    pub exception: &'static str,
    pub errorcode: &'static str,
    pub message: String,
}

impl IntoResponse for CertificateApiError {
    fn into_response(self) -> Response {
        let (status, body) = if self.is_invalid_parameter() {
            (
                StatusCode::BAD_REQUEST,
                ExceptionBody {
                    exception: "invalid_parameter_exception",
                    errorcode: "invalidparameter",
                    message: self.message(),
                },
            )
        } else {
            tracing::error!("Certificate lookup failed: {}", self);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ExceptionBody {
                    exception: "internal_error",
                    errorcode: "internalerror",
                    message: "Internal server error".to_string(),
                },
            )
        };

        (status, Json(body)).into_response()
    }
}
