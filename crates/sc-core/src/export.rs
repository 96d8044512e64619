//! Export boundary: save requests, outcomes, and path-based writing
//!
//! The save dialog itself belongs to the host (CLI arguments, a GUI shell,
//! an FFI embedder). This module carries what the host needs either side of
//! it: the dialog descriptors for each export format, and a structured
//! outcome that treats cancellation as a normal result rather than a fault.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A file-type filter entry for a save dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFilter {
    /// Display name (e.g. "Comma Separated Values")
    pub name: String,
    /// Extensions without the dot (e.g. "csv", or "*" for all files)
    pub extensions: Vec<String>,
}

impl FileFilter {
    fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Everything a host needs to present a save dialog for one export format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Dialog title
    pub title: String,
    /// File-type filters, most specific first
    pub filters: Vec<FileFilter>,
}

impl ExportRequest {
    /// Request descriptor for the primary (delimited text) export
    pub fn csv() -> Self {
        Self {
            title: "Export as CSV".to_string(),
            filters: vec![
                FileFilter::new("Comma Separated Values", &["csv"]),
                FileFilter::new("All Files", &["*"]),
            ],
        }
    }

    /// Request descriptor for the secondary (workbook) export
    pub fn xlsx() -> Self {
        Self {
            title: "Export as XLSX".to_string(),
            filters: vec![
                FileFilter::new("Microsoft Excel Spreadsheet", &["xlsx"]),
                FileFilter::new("All Files", &["*"]),
            ],
        }
    }
}

/// Result of one export attempt
///
/// Cancellation is an expected outcome, not an error, and a write failure
/// is reported here instead of propagating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// The file was written
    Saved {
        /// Path the file was written to
        file_path: PathBuf,
        /// Containing folder, for opening in a file browser
        folder_path: PathBuf,
    },
    /// The user declined to pick a destination
    Cancelled,
    /// The write failed
    Failed {
        /// Human-readable failure description
        message: String,
    },
}

impl ExportOutcome {
    /// Whether the export completed
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved { .. })
    }
}

/// Write export bytes to a destination path
///
/// Never returns an error: failures become `ExportOutcome::Failed`.
pub fn save_to_path(data: &[u8], path: &Path) -> ExportOutcome {
    match fs::write(path, data) {
        Ok(()) => ExportOutcome::Saved {
            file_path: path.to_path_buf(),
            folder_path: folder_of(path),
        },
        Err(e) => ExportOutcome::Failed {
            message: format!("failed to write '{}': {}", path.display(), e),
        },
    }
}

/// Derive the containing folder from a saved file path
///
/// A bare filename (no separator) yields an empty path.
pub fn folder_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Serialize an export outcome to JSON, for hosts consuming results as text
pub fn outcome_to_json(outcome: &ExportOutcome) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_request_descriptor() {
        let request = ExportRequest::csv();

        assert_eq!(request.title, "Export as CSV");
        assert_eq!(request.filters.len(), 2);
        assert_eq!(request.filters[0].extensions, vec!["csv"]);
        assert_eq!(request.filters[1].extensions, vec!["*"]);
    }

    #[test]
    fn test_xlsx_request_descriptor() {
        let request = ExportRequest::xlsx();

        assert_eq!(request.title, "Export as XLSX");
        assert_eq!(request.filters[0].extensions, vec!["xlsx"]);
    }

    #[test]
    fn test_folder_of_strips_filename() {
        assert_eq!(
            folder_of(Path::new("/tmp/exports/out.csv")),
            PathBuf::from("/tmp/exports")
        );
    }

    #[test]
    fn test_folder_of_bare_filename() {
        assert_eq!(folder_of(Path::new("out.csv")), PathBuf::from(""));
    }

    #[test]
    fn test_save_round_trip() {
        let path = std::env::temp_dir().join(format!("sc-core-export-{}.csv", std::process::id()));

        let outcome = save_to_path(b"a,b\n1,2", &path);

        match &outcome {
            ExportOutcome::Saved {
                file_path,
                folder_path,
            } => {
                assert_eq!(file_path, &path);
                assert_eq!(folder_path, &std::env::temp_dir());
            }
            other => panic!("expected Saved, got {:?}", other),
        }

        assert_eq!(fs::read(&path).unwrap(), b"a,b\n1,2");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_save_failure_is_reported_not_thrown() {
        let path = Path::new("/nonexistent-dir-sc-core/out.csv");
        let outcome = save_to_path(b"data", path);

        assert!(matches!(outcome, ExportOutcome::Failed { .. }));
    }

    #[test]
    fn test_cancellation_serializes_as_status() {
        let json = outcome_to_json(&ExportOutcome::Cancelled).unwrap();
        assert_eq!(json, r#"{"status":"cancelled"}"#);
    }
}
