use crate::output::print_json;
use adr_core::{status::Status, store::Store};
use anyhow::Context;
use std::path::Path;

pub fn run(
    dir: &Path,
    number: u32,
    new_status: &str,
    superseded_by: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let status = Status::parse(new_status);
    if status.is_custom() {
        eprintln!("warning: unrecognized status '{status}' recorded as a custom status");
    }

    let store = Store::new(dir);
    store
        .update_status(number, &status, superseded_by)
        .with_context(|| format!("failed to update record {number:04}"))?;

    if json {
        return print_json(&serde_json::json!({
            "number": number,
            "status": status.as_str(),
            "superseded_by": superseded_by,
        }));
    }

    match (&status, superseded_by) {
        (Status::Superseded, Some(by)) => println!("Record {number:04} superseded by {by:04}."),
        _ => println!("Record {number:04} status set to '{status}'."),
    }

    Ok(())
}
