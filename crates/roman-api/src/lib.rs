mod error;
pub use error::ApiError;

mod config;
pub use config::ApiConfig;

mod handler;
pub use handler::ApiHandler;

mod adapter;
pub use adapter::ConverterAdapter;

mod metrics;
pub use metrics::{MetricsBackend, NoOpMetrics, RequestOutcome};

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpApi;

#[cfg(feature = "http")]
pub use axum;
