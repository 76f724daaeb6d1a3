use crate::record::RecordSummary;
use crate::status;

/// Split summaries into the two index sections: everything retired
/// (Deprecated, or a status line starting with `Superseded`) versus the
/// rest. Custom statuses stay in the active table.
pub fn partition(records: &[RecordSummary]) -> (Vec<&RecordSummary>, Vec<&RecordSummary>) {
    let mut active = Vec::new();
    let mut retired = Vec::new();
    for r in records {
        if status::is_retired(&r.status) {
            retired.push(r);
        } else {
            active.push(r);
        }
    }
    (active, retired)
}

/// Render the full index document from summaries already in ascending
/// number order. Output depends only on the input, so regenerating over an
/// unchanged store is byte-identical.
pub fn render(records: &[RecordSummary]) -> String {
    let (active, retired) = partition(records);
    let mut out = String::new();
    out.push_str("# Architecture Decision Records\n");
    out.push('\n');
    out.push_str("This index is generated by `adr index`; do not edit it by hand.\n");
    out.push('\n');
    out.push_str("## Active\n");
    out.push('\n');
    push_table(&mut out, &active);
    out.push('\n');
    out.push_str("## Deprecated\n");
    out.push('\n');
    push_table(&mut out, &retired);
    out
}

fn push_table(out: &mut String, records: &[&RecordSummary]) {
    out.push_str("| Number | Title | Date | Status |\n");
    out.push_str("|--------|-------|------|--------|\n");
    for r in records {
        out.push_str(&format!(
            "| {:04} | {} | {} | {} |\n",
            r.number, r.title, r.date, r.status
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
