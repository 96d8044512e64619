//! Input boundary: reading selected files into raw file contents

use crate::document::RawFile;
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Read the selected files into raw contents, in selection order
///
/// Indices follow argument position, so read order never affects grouping.
/// Any unreadable file fails the whole read; partial input is never handed
/// to the merge engine.
pub fn read_raw_files(paths: &[PathBuf]) -> Result<Vec<RawFile>> {
    let mut files = Vec::with_capacity(paths.len());

    for (index, path) in paths.iter().enumerate() {
        let text = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.clone(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        files.push(RawFile::new(index, name, text));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn temp_path(stem: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sc-core-input-{}-{}.csv", stem, std::process::id()))
    }

    #[test]
    fn test_read_preserves_selection_order() {
        let first = temp_path("first");
        let second = temp_path("second");
        File::create(&first).unwrap().write_all(b"a,b\n1,2\n").unwrap();
        File::create(&second).unwrap().write_all(b"x,y\n9,8\n").unwrap();

        let files = read_raw_files(&[second.clone(), first.clone()]).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].index, 0);
        assert!(files[0].text.starts_with("x,y"));
        assert_eq!(files[1].index, 1);
        assert!(files[1].text.starts_with("a,b"));

        let _ = fs::remove_file(first);
        let _ = fs::remove_file(second);
    }

    #[test]
    fn test_missing_file_fails_whole_read() {
        let missing = temp_path("missing-never-created");
        let result = read_raw_files(&[missing]);

        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
