//! Batch file discovery.
//!
//! Command line arguments may name EAF files directly or directories that
//! are searched recursively. Nonexistent paths are logged and skipped so a
//! long batch invocation is not lost to one typo.

use std::path::PathBuf;

use log::{error, warn};

use crate::error::Error;

/// Expands files/directories into a sorted list of `.eaf` paths.
pub fn collect_eaf_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut all_files = Vec::new();
    for path in paths {
        if path.is_file() {
            if path.extension().is_some_and(|ext| ext == "eaf") {
                all_files.push(path.clone());
            } else {
                warn!("not an EAF file, skipping: {:?}", path);
            }
        } else if path.is_dir() {
            let pattern = format!("{}/**/*.eaf", path.display());
            for entry in glob::glob(&pattern)? {
                all_files.push(entry?);
            }
        } else {
            error!("no such file or directory: {:?}", path);
        }
    }
    all_files.sort();
    Ok(all_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_eaf_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sessions");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("a.eaf"), "").unwrap();
        fs::write(nested.join("b.eaf"), "").unwrap();
        fs::write(nested.join("notes.txt"), "").unwrap();

        let files = collect_eaf_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "eaf"));
    }

    #[test]
    fn direct_files_are_filtered_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let eaf = dir.path().join("a.eaf");
        let txt = dir.path().join("a.txt");
        fs::write(&eaf, "").unwrap();
        fs::write(&txt, "").unwrap();

        let files = collect_eaf_files(&[eaf.clone(), txt]).unwrap();
        assert_eq!(files, vec![eaf]);
    }

    #[test]
    fn missing_paths_are_skipped() {
        let files = collect_eaf_files(&[PathBuf::from("/nonexistent/path")]).unwrap();
        assert!(files.is_empty());
    }
}
