use thiserror::Error;

/// Failures while configuring or installing the global subscriber.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("unknown log format {0:?}, use one of: text, json, journald")]
    InvalidFormat(String),
    #[error("journald output needs linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("tracing subscriber install failed: {0}")]
    InitializationFailed(String),
    #[error("bad log filter directive {0:?}")]
    InvalidLogLevel(String),
}
