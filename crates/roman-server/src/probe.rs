use anyhow::Context;
use roman_exec::{ProbeConfig, Prober};
use tracing::info;

use crate::cli::ProbeArgs;

pub async fn run(args: ProbeArgs) -> anyhow::Result<()> {
    let cfg = ProbeConfig::try_from(&args).context("invalid probe arguments")?;
    let prober = Prober::new(cfg)?;

    let total = args.urls.len();
    info!(
        urls = total,
        concurrency = prober.config().concurrency.get(),
        "probing"
    );

    prober.run(args.urls).await.context("probe failed")?;
    info!(urls = total, "all urls reachable");
    Ok(())
}
