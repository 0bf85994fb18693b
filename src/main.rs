use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feint_uci::UciEngine;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("feint starting");
    UciEngine::new().run()?;
    Ok(())
}
