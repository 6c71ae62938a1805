//! Filesystem helpers for composing working trees.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// Recursively copy the tree rooted at `src` into `dst`.
///
/// Directory structure is recreated; regular files are copied with their
/// contents (and, on Unix, their permission bits via `fs::copy`).
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Remove the version-control metadata directory from a copied working
/// tree, so the combined tree carries no nested repository markers.
pub fn remove_repo_metadata(tree: &Path) -> Result<()> {
    let metadata = tree.join(".git");
    if metadata.exists() {
        fs::remove_dir_all(&metadata)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_tree_recreates_structure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join("nested/deep")).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("nested/deep/leaf.txt"), "leaf").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            fs::read_to_string(dst.join("nested/deep/leaf.txt")).unwrap(),
            "leaf"
        );
    }

    #[test]
    fn test_copy_tree_includes_hidden_directories() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join(".git")).unwrap();
        fs::write(src.join(".git/HEAD"), "ref: refs/heads/main").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert!(dst.join(".git/HEAD").exists());
    }

    #[test]
    fn test_copy_tree_empty_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir(&src).unwrap();

        copy_tree(&src, &dst).unwrap();

        assert!(dst.is_dir());
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
    }

    #[test]
    fn test_remove_repo_metadata() {
        let temp = TempDir::new().unwrap();
        let tree = temp.path().join("tree");
        fs::create_dir_all(tree.join(".git/objects")).unwrap();
        fs::write(tree.join("kept.txt"), "kept").unwrap();

        remove_repo_metadata(&tree).unwrap();

        assert!(!tree.join(".git").exists());
        assert!(tree.join("kept.txt").exists());
    }

    #[test]
    fn test_remove_repo_metadata_tolerates_absence() {
        let temp = TempDir::new().unwrap();
        let tree = temp.path().join("tree");
        fs::create_dir(&tree).unwrap();

        remove_repo_metadata(&tree).unwrap();
    }
}
