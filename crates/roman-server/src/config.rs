use std::net::SocketAddr;

use roman_api::ApiConfig;
use roman_exec::{ConcurrencyLimit, ExecError, ProbeConfig};
use roman_observe::LoggerConfig;

use crate::cli::{CliArgs, ProbeArgs, ServeArgs};

pub fn logger_config(args: &CliArgs) -> LoggerConfig {
    LoggerConfig {
        format: args.log_format,
        level: args.log_level.clone(),
        ..Default::default()
    }
}

/// Validated settings for `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub api: ApiConfig,
    pub metrics: bool,
}

impl TryFrom<ServeArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let api = ApiConfig {
            max_input: args.max_input,
        };
        api.validate().map_err(anyhow::Error::msg)?;
        Ok(Self {
            addr: args.addr,
            api,
            metrics: args.metrics,
        })
    }
}

impl TryFrom<&ProbeArgs> for ProbeConfig {
    type Error = ExecError;

    fn try_from(args: &ProbeArgs) -> Result<Self, Self::Error> {
        let cfg = ProbeConfig {
            concurrency: ConcurrencyLimit::try_from(args.concurrency)?,
            timeout_ms: args.timeout_ms,
            use_system_proxy: !args.no_proxy,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_args(concurrency: usize, timeout_ms: u64) -> ProbeArgs {
        ProbeArgs {
            concurrency,
            timeout_ms,
            no_proxy: false,
            urls: vec!["http://localhost".into()],
        }
    }

    #[test]
    fn serve_args_convert() {
        let cfg = ServerConfig::try_from(ServeArgs {
            addr: "127.0.0.1:9000".parse().unwrap(),
            max_input: 3999,
            metrics: false,
        })
        .unwrap();
        assert_eq!(cfg.api.max_input, 3999);
        assert!(!cfg.metrics);
    }

    #[test]
    fn non_positive_max_is_rejected() {
        let res = ServerConfig::try_from(ServeArgs {
            addr: "127.0.0.1:9000".parse().unwrap(),
            max_input: 0,
            metrics: true,
        });
        assert!(res.is_err());
    }

    #[test]
    fn probe_args_convert() {
        let cfg = ProbeConfig::try_from(&probe_args(3, 250)).unwrap();
        assert_eq!(cfg.concurrency.get(), 3);
        assert_eq!(cfg.timeout_ms, 250);
        assert!(cfg.use_system_proxy);
    }

    #[test]
    fn probe_args_reject_zero_values() {
        assert_eq!(
            ProbeConfig::try_from(&probe_args(0, 250)).unwrap_err(),
            ExecError::ZeroConcurrency
        );
        assert_eq!(
            ProbeConfig::try_from(&probe_args(1, 0)).unwrap_err(),
            ExecError::ZeroTimeout
        );
    }
}
