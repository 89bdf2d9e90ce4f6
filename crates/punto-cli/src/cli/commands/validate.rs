use std::path::Path;

use anyhow::{Context, Result};
use punto_core::EventStore;

pub fn run(path: &Path) -> Result<()> {
    let store =
        EventStore::load(path).with_context(|| format!("invalid dataset {}", path.display()))?;
    let narratives: usize = store.events().iter().map(|e| e.narrative_count()).sum();
    println!(
        "OK: {} event(s), {} narrative(s) in {}",
        store.len(),
        narratives,
        path.display()
    );
    Ok(())
}
