//! Full-screen terminal browser for Punto Medio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use punto_core::EventStore;
use punto_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive browser until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal or the terminal fails.
pub async fn run_browser(config: Config, store: EventStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Browse mode requires a terminal.\n\
             Use `punto events list` or `punto search <query>` for non-interactive output."
        );
    }
    tracing::info!(events = store.len(), "starting browser");

    let mut runtime = TuiRuntime::new(config, store)?;
    runtime.run()?;

    tracing::info!("browser closed");
    Ok(())
}
