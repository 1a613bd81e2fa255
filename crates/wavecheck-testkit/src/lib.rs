//! Test utilities for wavecheck
//!
//! This crate provides shared testing utilities used across the wavecheck workspace.

use std::path::Path;
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if the working directory cannot be determined or the temporary
/// directory cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a fixture file tree from `(relative path, contents)` pairs.
///
/// Parent directories are created as needed. Paths use `/` separators on
/// every platform.
///
/// # Panics
///
/// Panics on any IO failure; fixtures are test-only.
pub fn write_tree(base: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = base.join(relative.replace('/', std::path::MAIN_SEPARATOR_STR));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        std::fs::write(&path, contents).expect("Failed to write fixture file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tree_creates_nested_files() {
        let temp = temp_dir_in_workspace();
        write_tree(temp.path(), &[("a/b/c.txt", "hello"), ("top.txt", "x")]);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("a/b/c.txt")).unwrap(),
            "hello"
        );
        assert!(temp.path().join("top.txt").is_file());
    }
}
