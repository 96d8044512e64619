//! Core types for representing input files and the combined document

use serde::{Deserialize, Serialize};

/// A single input file, positioned by its place in the user's selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFile {
    /// Position in selection order (0-based)
    pub index: usize,
    /// Display name of the file
    pub name: String,
    /// Full decoded file content, newline-delimited, first line = header
    pub text: String,
}

impl RawFile {
    /// Create a new raw file
    pub fn new(index: usize, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Rows sharing a merge identity, emitted under a single header line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderGroup {
    /// Header line, as it appears in the output
    pub header: String,
    /// Body rows in encounter order
    pub rows: Vec<String>,
}

impl HeaderGroup {
    /// Get the number of body rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The result of combining input files: header groups in first-encounter order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedDocument {
    /// Header groups in the order they were first encountered
    pub groups: Vec<HeaderGroup>,
}

impl CombinedDocument {
    /// Get the number of header groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Get the total number of body rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    /// Check whether the document contains any groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serialize to the combined text form
    ///
    /// Each group is its header line followed by its rows, one per line.
    /// Groups are separated by a single blank line.
    pub fn text(&self) -> String {
        let blocks: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                let mut lines = Vec::with_capacity(group.rows.len() + 1);
                lines.push(group.header.as_str());
                lines.extend(group.rows.iter().map(|r| r.as_str()));
                lines.join("\n")
            })
            .collect();

        blocks.join("\n\n")
    }
}
