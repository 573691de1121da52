use std::net::SocketAddr;

use clap::{ArgAction, Args, Parser, Subcommand};
use roman_observe::LoggerFormat;

/// Roman-numeral HTTP service and URL prober.
#[derive(Debug, Parser)]
#[command(name = "roman-server", version)]
pub struct CliArgs {
    /// Log filter directive, e.g. `info` or `info,roman_api=debug`.
    #[arg(long, env = "ROMAN_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format: text, json or journald.
    #[arg(long, env = "ROMAN_LOG_FORMAT", default_value = "text", global = true)]
    pub log_format: LoggerFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `GET /roman?query=N` until Ctrl+C or SIGTERM.
    Serve(ServeArgs),
    /// GET every URL, a bounded number at a time; fail if any URL fails.
    Probe(ProbeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "ROMAN_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// Largest integer accepted by `/roman`.
    #[arg(long, env = "ROMAN_MAX_INPUT", default_value_t = 100_000)]
    pub max_input: i64,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long, env = "ROMAN_METRICS", default_value_t = true, action = ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ProbeArgs {
    /// Maximum number of requests in flight.
    #[arg(short, long, env = "ROMAN_PROBE_CONCURRENCY", default_value_t = 5)]
    pub concurrency: usize,

    /// Per-request timeout in milliseconds.
    #[arg(long, env = "ROMAN_PROBE_TIMEOUT_MS", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Ignore HTTP_PROXY/HTTPS_PROXY from the environment.
    #[arg(long)]
    pub no_proxy: bool,

    /// URLs to probe.
    #[arg(required = true)]
    pub urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = CliArgs::try_parse_from(["roman-server", "serve"]).unwrap();
        assert_eq!(cli.log_format, LoggerFormat::Text);
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.addr, "0.0.0.0:8080".parse().unwrap());
                assert_eq!(args.max_input, 100_000);
                assert!(args.metrics);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn probe_flags() {
        let cli = CliArgs::try_parse_from([
            "roman-server",
            "--log-format",
            "json",
            "probe",
            "-c",
            "2",
            "--timeout-ms",
            "100",
            "http://a.example",
            "http://b.example",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LoggerFormat::Json);
        match cli.command {
            Command::Probe(args) => {
                assert_eq!(args.concurrency, 2);
                assert_eq!(args.timeout_ms, 100);
                assert_eq!(args.urls.len(), 2);
                assert!(!args.no_proxy);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn probe_requires_urls() {
        assert!(CliArgs::try_parse_from(["roman-server", "probe"]).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(CliArgs::try_parse_from(["roman-server", "--log-format", "xml", "serve"]).is_err());
    }
}
