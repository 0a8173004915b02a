#![forbid(unsafe_code)]

use super::audit::ContrastRow;
use anyhow::Result;
use indexmap::IndexMap;
use std::{fs::File, io::BufWriter, path::PathBuf};

/// Serialize the per-preset contrast rows to a JSON file.
pub fn save_audit_json(
    path: impl AsRef<std::path::Path>,
    reports: &[(&'static str, Vec<ContrastRow>)],
) -> Result<PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let w = BufWriter::new(f);
    let by_preset: IndexMap<&str, &[ContrastRow]> = reports
        .iter()
        .map(|(name, rows)| (*name, rows.as_slice()))
        .collect();
    serde_json::to_writer_pretty(w, &by_preset)?;
    Ok(path.to_path_buf())
}
