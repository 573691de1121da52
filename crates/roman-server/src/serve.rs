use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use roman_api::{ConverterAdapter, HttpApi, MetricsBackend};
use roman_prometheus::PrometheusMetrics;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use crate::config::ServerConfig;

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let app = app(&config)?;

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(
        addr = %listener.local_addr()?,
        max_input = config.api.max_input,
        metrics = config.metrics,
        "roman api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("service shut down");
    Ok(())
}

/// Build the full router: conversion API plus `/metrics` when enabled.
pub fn app(config: &ServerConfig) -> anyhow::Result<Router> {
    let handler = Arc::new(ConverterAdapter::new(config.api.clone()));
    let api = HttpApi::new(handler);

    if !config.metrics {
        return Ok(api.router());
    }

    let metrics = PrometheusMetrics::new()?;
    let backend: Arc<dyn MetricsBackend> = Arc::new(metrics.clone());
    let metrics_routes = Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(metrics);

    Ok(api.with_metrics(backend).router().merge(metrics_routes))
}

/// GET /metrics
async fn render_metrics(State(metrics): State<PrometheusMetrics>) -> Response {
    match metrics.encode() {
        Ok(body) => ([(header::CONTENT_TYPE, metrics.content_type())], body).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
    info!("shutting down...");
}
