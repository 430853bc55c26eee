use anyhow::Result;
use serde::Serialize;

use super::{AppState, Output};

/// List stored keys with their size and last write.
pub(crate) async fn status(state: &AppState, out: &Output) -> Result<()> {
    let records = state.db.list_records().await?;

    if out.json {
        return out.print_json(&records);
    }

    println!("Data file: {}", state.db.path().display());
    if records.is_empty() {
        println!("  (empty)");
    }
    for record in &records {
        println!(
            "  {:<14} {:>8} bytes  updated {}",
            record.key,
            record.bytes,
            record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct Cleared {
    cleared: bool,
}

/// Drop the stored assessment and the whole check-in history.
pub(crate) async fn clear(state: &AppState, out: &Output) -> Result<()> {
    state.records.clear().await?;

    if out.json {
        return out.print_json(&Cleared { cleared: true });
    }
    println!("Cleared assessment and check-in history.");
    Ok(())
}
