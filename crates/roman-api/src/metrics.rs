use std::time::Duration;

use crate::error::ApiError;

/// Outcome label attached to every recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Ok,
    MethodNotAllowed,
    InvalidInput,
    OutOfRange,
    Internal,
}

impl RequestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOutcome::Ok => "ok",
            RequestOutcome::MethodNotAllowed => "method_not_allowed",
            RequestOutcome::InvalidInput => "invalid_input",
            RequestOutcome::OutOfRange => "out_of_range",
            RequestOutcome::Internal => "internal",
        }
    }
}

impl From<&ApiError> for RequestOutcome {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::MethodNotAllowed => RequestOutcome::MethodNotAllowed,
            ApiError::InvalidInput(_) => RequestOutcome::InvalidInput,
            ApiError::OutOfRange(_) => RequestOutcome::OutOfRange,
            ApiError::Internal(_) => RequestOutcome::Internal,
        }
    }
}

/// Sink for request metrics.
pub trait MetricsBackend: Send + Sync + 'static {
    fn record_request(&self, outcome: RequestOutcome, elapsed: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline]
    fn record_request(&self, _outcome: RequestOutcome, _elapsed: Duration) {}
}
