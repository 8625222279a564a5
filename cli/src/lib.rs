use anyhow::{ensure, Result};
use ranker_core::Hit;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Enumerate the corpus directory (non-recursive) and read each file into a
/// `(label, content)` pair, label being the bare file name.
///
/// Entries are sorted by file name so DocId assignment is stable across
/// platforms. A file that cannot be read is skipped whole and logged; it
/// never shows up partially indexed.
pub fn load_corpus(dir: &Path) -> Result<Vec<(String, String)>> {
    ensure!(dir.is_dir(), "corpus path {} is not a directory", dir.display());
    let mut docs = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        let label = entry.file_name().to_string_lossy().into_owned();
        match fs::read_to_string(entry.path()) {
            Ok(content) => docs.push((label, content)),
            Err(err) => tracing::warn!(%label, %err, "skipping unreadable document"),
        }
    }
    Ok(docs)
}

/// Render hits the way the reference CLI prints them: one `label: score`
/// line per hit, with 15 fractional digits.
pub fn format_hits(hits: &[Hit]) -> String {
    hits.iter()
        .map(|h| format!("{}: {:.15}\n", h.label, h.score))
        .collect()
}
