use std::time::Duration;

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};
use roman_api::{MetricsBackend, RequestOutcome};
use thiserror::Error;

const OUTCOMES: [RequestOutcome; 5] = [
    RequestOutcome::Ok,
    RequestOutcome::MethodNotAllowed,
    RequestOutcome::InvalidInput,
    RequestOutcome::OutOfRange,
    RequestOutcome::Internal,
];

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("metrics output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Request metrics held in a private [`Registry`].
#[derive(Clone)]
pub struct PrometheusMetrics {
    registry: Registry,
    requests: IntCounterVec,
    duration: Histogram,
}

impl PrometheusMetrics {
    pub fn new() -> Result<Self, MetricsError> {
        Self::with_registry(Registry::new())
    }

    /// Register the collectors into an existing registry.
    pub fn with_registry(registry: Registry) -> Result<Self, MetricsError> {
        let requests = IntCounterVec::new(
            Opts::new("roman_requests_total", "Requests served by /roman"),
            &["outcome"],
        )?;
        let duration = Histogram::with_opts(HistogramOpts::new(
            "roman_request_duration_seconds",
            "Time spent handling /roman requests",
        ))?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        // Pre-create every label so the series exist before the first request.
        for outcome in OUTCOMES {
            requests.with_label_values(&[outcome.as_str()]);
        }

        Ok(Self {
            registry,
            requests,
            duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Content type of [`encode`](Self::encode) output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_request(&self, outcome: RequestOutcome, elapsed: Duration) {
        self.requests.with_label_values(&[outcome.as_str()]).inc();
        self.duration.observe(elapsed.as_secs_f64());
    }
}
