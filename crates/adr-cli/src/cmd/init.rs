use crate::output::print_json;
use adr_core::{paths, store::Store};
use anyhow::Context;
use std::path::Path;

pub fn run(dir: &Path, json: bool) -> anyhow::Result<()> {
    let store = Store::new(dir);
    let outcome = store
        .init()
        .with_context(|| format!("failed to initialize store at {}", dir.display()))?;

    if json {
        return print_json(&outcome);
    }

    println!("Initializing ADR store in: {}", dir.display());
    match &outcome.seed_created {
        Some(file) => println!("  created: {file}"),
        None => {
            let n = outcome.records;
            println!("  exists:  {} record{}", n, if n == 1 { "" } else { "s" });
        }
    }
    if outcome.index_created {
        println!("  created: {}", paths::INDEX_FILE);
    } else {
        println!("  exists:  {}", paths::INDEX_FILE);
    }

    Ok(())
}
