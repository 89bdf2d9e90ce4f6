use anyhow::{Context, Result};
use punto_core::EventStore;
use punto_core::config::Config;

pub async fn run(config: Config, store: EventStore) -> Result<()> {
    punto_tui::run_browser(config, store)
        .await
        .context("browser failed")
}
