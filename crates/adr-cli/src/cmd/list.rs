use crate::output::{print_json, print_table};
use adr_core::store::Store;
use anyhow::Context;
use std::path::Path;

pub fn run(dir: &Path, json: bool) -> anyhow::Result<()> {
    let store = Store::new(dir);
    let records = store.list().context("failed to list records")?;

    if json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                format!("{:04}", r.number),
                r.title.clone(),
                r.status.clone(),
                r.date.clone(),
            ]
        })
        .collect();
    print_table(&["NUMBER", "TITLE", "STATUS", "DATE"], rows);

    Ok(())
}
