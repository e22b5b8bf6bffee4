use crate::cert::{CertificateLookupService, CertificateUrlParams, CertificateUrlResult};
use crate::utils::errors::{CertificateApiError, Result};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn get_certificate_urls(
    State(service): State<CertificateLookupService>,
    params: std::result::Result<Query<CertificateUrlParams>, QueryRejection>,
) -> Result<Json<CertificateUrlResult>> {
    let Query(params) =
        params.map_err(|e| CertificateApiError::InvalidParameter(e.body_text()))?;
    lookup(&service, params).await
}

pub async fn post_certificate_urls(
    State(service): State<CertificateLookupService>,
    params: std::result::Result<Json<CertificateUrlParams>, JsonRejection>,
) -> Result<Json<CertificateUrlResult>> {
    let Json(params) =
        params.map_err(|e| CertificateApiError::InvalidParameter(e.body_text()))?;
    lookup(&service, params).await
}

async fn lookup(
    service: &CertificateLookupService,
    params: CertificateUrlParams,
) -> Result<Json<CertificateUrlResult>> {
    tracing::debug!(
        "Certificate URL request (userid={}, email given={})",
        params.userid,
        params.useremail.as_deref().is_some_and(|e| !e.is_empty())
    );
    let result = service.lookup(&params).await?;
    tracing::debug!("Certificate URL request finished with status {}", result.status());
    Ok(Json(result))
}
