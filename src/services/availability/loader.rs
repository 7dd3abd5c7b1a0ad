use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::booking::BookedEntry;

/// Read the booked-entries JSON array. A missing file means nothing is booked.
pub fn load_booked_entries(path: &Path) -> Result<Vec<BookedEntry>> {
    if !path.exists() {
        log::info!("No booking snapshot at {}; all slots open", path.display());
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read booked entries from {}", path.display()))?;
    let entries: Vec<BookedEntry> =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    log::info!(
        "Loaded {} booked entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize booked entries from {}",
        path.display()
    ))
}
