use crate::output::print_json;
use adr_core::store::Store;
use anyhow::Context;
use std::path::Path;

pub fn run(dir: &Path, json: bool) -> anyhow::Result<()> {
    let store = Store::new(dir);
    let outcome = store
        .regenerate_index()
        .context("failed to regenerate index")?;

    if json {
        return print_json(&outcome);
    }

    println!(
        "Regenerated {} ({} record{}: {} active, {} retired)",
        outcome.path.display(),
        outcome.records,
        if outcome.records == 1 { "" } else { "s" },
        outcome.active,
        outcome.retired
    );

    Ok(())
}
