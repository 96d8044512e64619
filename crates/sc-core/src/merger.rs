//! Merge engine for combining delimited files by header identity

use crate::document::{CombinedDocument, HeaderGroup, RawFile};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Identity of a header group while merging
///
/// When duplicates are kept, files never merge across each other, so the
/// key carries the source file index. A composite key keeps grouping
/// correct even if a header happens to contain a marker-like substring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    header: String,
    source: Option<usize>,
}

/// Combine input files into a single document
///
/// Rows are grouped by header line. With `dedupe` enabled, files sharing a
/// header merge into one group and repeated rows collapse to their first
/// occurrence; otherwise every file keeps its own group and its exact rows.
/// Groups and rows retain first-encounter order, following file selection
/// order. Files with no body rows contribute nothing; an empty result is a
/// valid document, not an error. Malformed input (a repeated file index)
/// fails the whole run with no partial document.
pub fn combine(files: &[RawFile], dedupe: bool) -> Result<CombinedDocument> {
    // File indices disambiguate groups when duplicates are kept; a repeated
    // index would silently fuse two files' groups, so it fails the whole run
    let mut seen_indices: HashSet<usize> = HashSet::new();
    for file in files {
        if !seen_indices.insert(file.index) {
            return Err(Error::Merge(format!(
                "duplicate file index {} ('{}')",
                file.index, file.name
            )));
        }
    }

    let mut order: Vec<GroupKey> = Vec::new();
    let mut rows_by_key: HashMap<GroupKey, Vec<String>> = HashMap::new();

    for file in files {
        let text = file.text.replace('\r', "");
        let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

        // First non-blank line is the header; a blank-only file is skipped
        let header = match lines.next() {
            Some(h) => h,
            None => continue,
        };

        // A group only comes into being with its first body row, so a
        // header-only file contributes nothing
        let body: Vec<&str> = lines.collect();
        if body.is_empty() {
            continue;
        }

        let key = GroupKey {
            header: header.to_string(),
            source: if dedupe { None } else { Some(file.index) },
        };

        if !rows_by_key.contains_key(&key) {
            order.push(key.clone());
        }

        rows_by_key
            .entry(key)
            .or_default()
            .extend(body.into_iter().map(str::to_string));
    }

    let groups: Vec<HeaderGroup> = order
        .into_iter()
        .map(|key| {
            let rows = rows_by_key.remove(&key).unwrap_or_default();
            let rows = if dedupe { dedupe_rows(rows) } else { rows };
            HeaderGroup {
                header: key.header,
                rows,
            }
        })
        .collect();

    Ok(CombinedDocument { groups })
}

/// Drop later duplicates of an earlier-seen row, keeping first-occurrence order
fn dedupe_rows(rows: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    rows.into_iter().filter(|row| seen.insert(row.clone())).collect()
}
