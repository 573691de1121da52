use crate::error::ExecError;
use crate::fanout::ConcurrencyLimit;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Maximum number of requests in flight (default: 5).
    pub concurrency: ConcurrencyLimit,
    /// Per-request timeout (default: 5 seconds).
    pub timeout_ms: u64,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment (default: true).
    pub use_system_proxy: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            concurrency: ConcurrencyLimit::default(),
            timeout_ms: 5_000,
            use_system_proxy: true,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<(), ExecError> {
        if self.timeout_ms == 0 {
            return Err(ExecError::ZeroTimeout);
        }
        Ok(())
    }
}
