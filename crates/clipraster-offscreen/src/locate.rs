//! Block file discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result, BLOCK_PREFIX};

/// Find the block files of one canvas dump.
///
/// Lists `dir`, keeps entries whose file name starts with `"block"`, and
/// returns the full paths sorted lexicographically. The sort is plain
/// string order, not numeric: `block10` sorts before `block2`, so dumps
/// must zero-pad the block index to get correct raster order.
///
/// An empty result is valid input to the reconstructor; a missing
/// directory fails with [`Error::DirectoryNotFound`].
pub fn locate_blocks<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    let entries = fs::read_dir(dir).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::DirectoryNotFound(dir.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with(BLOCK_PREFIX) {
            paths.push(entry.path());
        }
    }

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_zero_padded_names_sort_numerically() {
        let dir = tempdir().unwrap();
        for name in ["block_010", "block_000", "block_002"] {
            touch(dir.path(), name);
        }

        let paths = locate_blocks(dir.path()).unwrap();
        assert_eq!(names(&paths), ["block_000", "block_002", "block_010"]);
    }

    #[test]
    fn test_unpadded_names_sort_lexicographically() {
        let dir = tempdir().unwrap();
        for name in ["block_1", "block_2", "block_10"] {
            touch(dir.path(), name);
        }

        // string order, not numeric: block_10 lands before block_2
        let paths = locate_blocks(dir.path()).unwrap();
        assert_eq!(names(&paths), ["block_1", "block_10", "block_2"]);
    }

    #[test]
    fn test_ignores_other_files() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "block_000");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "checksums");

        let paths = locate_blocks(dir.path()).unwrap();
        assert_eq!(names(&paths), ["block_000"]);
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        assert!(locate_blocks(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            locate_blocks(&missing),
            Err(Error::DirectoryNotFound(_))
        ));
    }
}
