pub mod error;
pub mod handlers;

use crate::cert::CertificateLookupService;
use crate::utils::errors::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const CERTIFICATE_URLS_ROUTE: &str = "/api/v1/certificate-urls";

pub fn build_router(service: CertificateLookupService) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            CERTIFICATE_URLS_ROUTE,
            get(handlers::get_certificate_urls).post(handlers::post_certificate_urls),
        )
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c
pub async fn serve(addr: SocketAddr, service: CertificateLookupService) -> Result<()> {
    let router = build_router(service);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Certificate API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Certificate API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
