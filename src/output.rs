//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the interactive listing and the
//! progress spinner are suppressed and a single JSON document describing
//! the scan is printed to stdout instead.

use serde::Serialize;

use crate::{scanner::FileEntry, utils::format_size};

/// Top-level JSON document emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Listed files, largest first, truncated to the limit when one is set.
    pub files: Vec<JsonFileEntry>,

    /// Aggregated summary over ALL matched files, ignoring the limit.
    pub summary: JsonSummary,
}

/// A single file in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonFileEntry {
    /// File size in bytes.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"1.5 Kbytes"`).
    pub size_formatted: String,

    /// Path to the file.
    pub path: String,
}

/// Aggregated summary across all matched files.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Total number of matched files.
    pub total_files: usize,

    /// Total size in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size.
    pub total_size_formatted: String,
}

impl JsonReport {
    /// Build a report from a sorted result set, applying the same
    /// truncation rule as the interactive listing.
    #[must_use]
    pub fn from_entries(entries: &[FileEntry], limit: i64) -> Self {
        let listed = match usize::try_from(limit) {
            Ok(cap) if cap < entries.len() => &entries[..cap],
            _ => entries,
        };

        let total_size: u64 = entries.iter().map(|entry| entry.size).sum();

        Self {
            files: listed
                .iter()
                .map(|entry| JsonFileEntry {
                    size: entry.size,
                    size_formatted: format_size(entry.size),
                    path: entry.path.display().to_string(),
                })
                .collect(),
            summary: JsonSummary {
                total_files: entries.len(),
                total_size,
                total_size_formatted: format_size(total_size),
            },
        }
    }
}
