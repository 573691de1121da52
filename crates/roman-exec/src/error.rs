use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("concurrency limit must be at least 1")]
    ZeroConcurrency,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Aggregate failure of a fan-out run.
///
/// Carries one sampled failure; every other failure of the same run is dropped.
#[derive(Error, Debug)]
pub enum FanOutError<E> {
    #[error("task failed: {0}")]
    Task(E),
    #[error("task panicked: {0}")]
    Panicked(String),
}

impl<E> FanOutError<E> {
    /// Returns the task error, if the sampled failure was one.
    pub fn into_task(self) -> Option<E> {
        match self {
            FanOutError::Task(e) => Some(e),
            _ => None,
        }
    }
}
