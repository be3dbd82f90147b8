use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use overlap_check::FileDocument;

const EXTENSION: &str = ".txt";

/// Lists regular files directly under `dir` whose names end with `.txt` in any case,
/// sorted by file name.
pub fn text_files<P>(dir: P) -> Result<Vec<FileDocument>>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let mut paths = vec![];
    for entry in fs::read_dir(dir).with_context(|| format!("could not list {}", dir.display()))? {
        let entry = entry.with_context(|| format!("could not list {}", dir.display()))?;
        let name = entry.file_name();
        if !name.to_string_lossy().to_lowercase().ends_with(EXTENSION) {
            continue;
        }
        // Follows symlinks.
        if !entry.path().is_file() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), found = paths.len(), "discovered text files");
    Ok(paths.into_iter().map(FileDocument::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use overlap_check::Document;

    #[test]
    fn test_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("A.TXT"), "a").unwrap();
        fs::write(dir.path().join("c.Txt"), "c").unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join("txt"), "x").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let docs = text_files(dir.path()).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["A.TXT", "b.txt", "c.Txt"]);
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(text_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(text_files(dir.path().join("nope")).is_err());
    }
}
