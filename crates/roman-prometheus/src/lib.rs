//! Prometheus metrics backend for the roman API.
//!
//! This crate provides a [`PrometheusMetrics`] implementation of [`roman_api::MetricsBackend`] that exposes metrics in Prometheus format.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use roman_api::{ConverterAdapter, MetricsBackend};
//! use roman_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let backend: Arc<dyn MetricsBackend> = Arc::new(metrics.clone());
//!
//! // Hand `backend` to `HttpApi::with_metrics`, serve `metrics.encode()` on /metrics.
//! let text = metrics.encode()?;
//! assert!(text.contains("roman_requests_total"));
//! # let _ = (backend, ConverterAdapter::default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `roman_requests_total{outcome}` - Counter
//! - `roman_request_duration_seconds` - Histogram
//!
//! ## HTTP Server
//! This crate does NOT provide HTTP server for `/metrics` endpoint.
//! Mount [`PrometheusMetrics::encode`] in your application's router.

mod backend;
pub use backend::{MetricsError, PrometheusMetrics};

pub use prometheus::{Encoder, Registry, TextEncoder};
