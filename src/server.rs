//! The `/metrics` scrape endpoint.

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use kpi_exporter::KpiMetrics;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub fn router(metrics: Arc<KpiMetrics>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<Arc<KpiMetrics>>) -> Response {
    match metrics.encode_text() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Bind the metrics port on all interfaces.
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind metrics endpoint on {addr}"))
}

/// Serve scrapes until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    metrics: Arc<KpiMetrics>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Serving Prometheus metrics at http://{addr}/metrics");
    }

    axum::serve(listener, router(metrics))
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("Metrics server stopping");
        })
        .await
        .context("Metrics server failed")
}
