//! Watch command - keep a file's highlights current

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hush_config::Config;
use hush_engine::HighlightSession;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::file_host::FileHost;

const MIN_INTERVAL_MS: u64 = 50;

pub async fn handle(config: &Config, file: PathBuf, interval_ms: u64) -> Result<()> {
    let table = Arc::new(super::pattern_table(config)?);
    let mut host = FileHost::open(&file, true).await?;
    let session = HighlightSession::attach(&mut host, table);

    info!("Watching {} every {} ms", file.display(), interval_ms);
    println!("Watching {} (Ctrl-C to stop)", file.display());

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(MIN_INTERVAL_MS)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = host.poll().await {
                    warn!("Failed to read {}: {}", file.display(), e);
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    session.dispose(&mut host);
    Ok(())
}
