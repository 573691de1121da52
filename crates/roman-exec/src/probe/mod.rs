//! HTTP reachability probe built on [`fan_out`](crate::fan_out).
//!
//! Every URL gets one `GET`; a transport error or a non-2xx status fails that URL.
mod config;
pub use config::ProbeConfig;

use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::error::{ExecError, FanOutError};
use crate::fanout::fan_out;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid probe config: {0}")]
    Config(#[from] ExecError),
}

/// Probes a batch of URLs with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    cfg: ProbeConfig,
}

impl Prober {
    pub fn new(cfg: ProbeConfig) -> Result<Self, ProbeError> {
        cfg.validate()?;
        let mut builder = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms));
        if !cfg.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ProbeError::Client)?;
        Ok(Self { client, cfg })
    }

    #[inline]
    pub fn config(&self) -> &ProbeConfig {
        &self.cfg
    }

    /// Probe every URL, at most `concurrency` at a time.
    #[instrument(level = "debug", skip(self, urls), fields(concurrency = self.cfg.concurrency.get()))]
    pub async fn run<I, S>(&self, urls: I) -> Result<(), FanOutError<ProbeError>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = self.client.clone();
        fan_out(urls, self.cfg.concurrency, move |url: S| {
            let client = client.clone();
            let url = url.into();
            async move { check(&client, url).await }
        })
        .await
    }
}

async fn check(client: &Client, raw: String) -> Result<(), ProbeError> {
    let url = Url::parse(&raw).map_err(|e| ProbeError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ProbeError::Request {
            url: raw.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status {
            url: raw,
            status: status.as_u16(),
        });
    }
    debug!(url = %raw, status = status.as_u16(), "probe ok");
    Ok(())
}
